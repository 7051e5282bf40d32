multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD_PRECISION;
use common_errors::{ERROR_NONZERO_BALANCE, ERROR_TOO_MANY_MARKETS};
use common_proxies::proxy_market;
use common_structs::AccountSnapshot;

use crate::{cache::Cache, oracle, storage};

/// A what-if adjustment applied while summing one account's position: the
/// shares about to be redeemed and/or the debt about to be taken on in one
/// market.
pub struct HypotheticalOp<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub redeem_shares: ManagedDecimal<M, NumDecimals>,
    pub borrow_amount: ManagedDecimal<M, NumDecimals>,
}

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage + oracle::OracleModule + common_events::EventsModule + common_math::SharedMathModule
{
    /// Aggregate solvency of one account across every market it has entered,
    /// optionally adjusted by a hypothetical redeem/borrow in one of them.
    ///
    /// Returns `(liquidity, shortfall)` in USD WAD; exactly one is non-zero
    /// unless the account is exactly balanced. Each market contributes its
    /// stored snapshot — the caller accrues whichever market the current
    /// operation touches before computing. A missing price for any entered
    /// market aborts the whole computation; no partial sums ever escape.
    fn compute_account_liquidity(
        &self,
        account: &ManagedAddress,
        hypothetical: Option<&HypotheticalOp<Self::Api>>,
        cache: &mut Cache<Self>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let mut sum_collateral = self.wad_zero();
        let mut sum_debt = self.wad_zero();

        for asset in self.account_markets(account).iter() {
            let market = cache.get_cached_pool_address(&asset);
            let snapshot: AccountSnapshot<Self::Api> = self
                .tx()
                .to(&market)
                .typed(proxy_market::MarketProxy)
                .account_snapshot(account)
                .returns(ReturnsResult)
                .sync_call();

            let price = self.token_price(&asset, cache);
            let config = cache.get_cached_market_config(&asset);

            let underlying =
                self.mul_floor(&snapshot.shares, &snapshot.exchange_rate, WAD_PRECISION);
            let collateral_value = self.mul_floor(&underlying, &price, WAD_PRECISION);
            sum_collateral +=
                self.mul_floor(&collateral_value, &config.collateral_factor, WAD_PRECISION);
            sum_debt += self.mul_floor(&snapshot.debt, &price, WAD_PRECISION);

            if let Some(op) = hypothetical {
                if op.asset == asset {
                    sum_debt += self.mul_floor(&op.borrow_amount, &price, WAD_PRECISION);

                    // Same rounding chain as the contribution above, on fewer
                    // shares, so the subtraction cannot underflow.
                    let redeem_underlying =
                        self.mul_floor(&op.redeem_shares, &snapshot.exchange_rate, WAD_PRECISION);
                    let redeem_value = self.mul_floor(&redeem_underlying, &price, WAD_PRECISION);
                    sum_collateral -=
                        self.mul_floor(&redeem_value, &config.collateral_factor, WAD_PRECISION);
                }
            }
        }

        if sum_collateral >= sum_debt {
            (sum_collateral - sum_debt, self.wad_zero())
        } else {
            (self.wad_zero(), sum_debt - sum_collateral)
        }
    }

    /// Idempotent membership add, bounded by the configured ceiling.
    fn enter_market_internal(&self, account: &ManagedAddress, asset: &EgldOrEsdtTokenIdentifier) {
        let mut memberships = self.account_markets(account);
        if memberships.contains(asset) {
            return;
        }

        require!(
            memberships.len() < self.max_markets_per_account().get(),
            ERROR_TOO_MANY_MARKETS
        );

        memberships.insert(asset.clone());
        self.enter_market_event(account, asset);
    }

    /// Membership removal; refuses while the account still holds shares or
    /// debt in the market. Removing a non-member is a no-op.
    fn exit_market_internal(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        market: &ManagedAddress,
    ) {
        let mut memberships = self.account_markets(account);
        if !memberships.contains(asset) {
            return;
        }

        let snapshot: AccountSnapshot<Self::Api> = self
            .tx()
            .to(market)
            .typed(proxy_market::MarketProxy)
            .account_snapshot(account)
            .returns(ReturnsResult)
            .sync_call();

        let zero = self.to_decimal(BigUint::zero(), snapshot.shares.scale());
        require!(
            snapshot.shares == zero && snapshot.debt == zero,
            ERROR_NONZERO_BALANCE
        );

        memberships.swap_remove(asset);
        self.exit_market_event(account, asset);
    }
}
