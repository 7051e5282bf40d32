#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod factory;
pub mod liquidation;
pub mod liquidity;
pub mod oracle;
pub mod storage;
pub mod validation;
pub mod views;

use cache::Cache;
use common_constants::{
    DEFAULT_CLOSE_FACTOR, DEFAULT_LIQUIDATION_INCENTIVE, DEFAULT_MAX_MARKETS_PER_ACCOUNT,
};
pub use common_errors::*;
use common_proxies::proxy_market;
use liquidity::HypotheticalOp;

/// The market registry and solvency gatekeeper, and the user-facing surface
/// of the whole engine.
///
/// Every operation names one market; the engine accrues that market, answers
/// the cross-market solvency question the ledger cannot see, then drives the
/// ledger mutation through the market's owner-only endpoints. Markets never
/// call back in — the registry holds the only references, so the
/// engine/market relationship stays acyclic.
#[multiversx_sc::contract]
pub trait RiskEngine:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + config::ConfigModule
    + factory::FactoryModule
    + liquidity::LiquidityModule
    + liquidation::LiquidationModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    #[init]
    fn init(&self, market_template: &ManagedAddress, price_oracle: &ManagedAddress) {
        self.market_template_address().set(market_template);
        self.price_oracle_address().set(price_oracle);

        self.close_factor()
            .set(self.to_decimal_wad(BigUint::from(DEFAULT_CLOSE_FACTOR)));
        self.liquidation_incentive()
            .set(self.to_decimal_wad(BigUint::from(DEFAULT_LIQUIDATION_INCENTIVE)));
        self.max_markets_per_account()
            .set(DEFAULT_MAX_MARKETS_PER_ACCOUNT);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies the attached payment into its market as interest-bearing
    /// collateral. Always permitted on a listed market. Returns the minted
    /// shares.
    #[payable]
    #[endpoint(supply)]
    fn supply(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);
        let market = self.require_listed(&asset);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .supply(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Redeems `shares` from a market, gated by a hypothetical solvency check
    /// that excludes the withdrawn collateral. Returns the paid-out amount.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        shares: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        self.require_amount_greater_than_zero(&shares);
        let market = self.require_listed(&asset);

        let mut cache = Cache::new(self);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .update_indexes()
            .sync_call();

        let config = cache.get_cached_market_config(&asset);
        let shares_dec = self.to_decimal(shares, config.asset_decimals);

        let hypothetical = HypotheticalOp {
            asset: asset.clone(),
            redeem_shares: shares_dec.clone(),
            borrow_amount: self.to_decimal(BigUint::zero(), config.asset_decimals),
        };
        let (_, shortfall) =
            self.compute_account_liquidity(&caller, Some(&hypothetical), &mut cache);
        require!(shortfall == self.wad_zero(), ERROR_INSUFFICIENT_LIQUIDITY);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .withdraw(&caller, shares_dec)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Borrows `amount` against the caller's aggregate collateral. Enters the
    /// borrowed market for the caller first — debt outside the membership set
    /// would escape every future solvency check.
    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        self.require_amount_greater_than_zero(&amount);
        let market = self.require_listed(&asset);

        self.enter_market_internal(&caller, &asset);

        let mut cache = Cache::new(self);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .update_indexes()
            .sync_call();

        let config = cache.get_cached_market_config(&asset);
        let amount_dec = self.to_decimal(amount, config.asset_decimals);

        let hypothetical = HypotheticalOp {
            asset: asset.clone(),
            redeem_shares: self.to_decimal(BigUint::zero(), config.asset_decimals),
            borrow_amount: amount_dec.clone(),
        };
        let (_, shortfall) =
            self.compute_account_liquidity(&caller, Some(&hypothetical), &mut cache);
        require!(shortfall == self.wad_zero(), ERROR_INSUFFICIENT_LIQUIDITY);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .borrow(&caller, amount_dec)
            .sync_call();
    }

    /// Repays debt in the payment's market with the attached funds. The
    /// borrower defaults to the caller; anyone may repay on another account's
    /// behalf. Returns the applied amount.
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        opt_borrower: OptionalValue<ManagedAddress>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();

        let payer = self.blockchain().get_caller();
        let borrower = match opt_borrower {
            OptionalValue::Some(account) => account,
            OptionalValue::None => payer.clone(),
        };

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);
        let market = self.require_listed(&asset);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .repay(&payer, &borrower)
            .egld_or_single_esdt(&asset, 0, &amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Liquidates an underwater borrower: the attached payment repays debt in
    /// its market (capped by the close factor), and discounted collateral
    /// shares are seized in `collateral_asset`'s market. Returns the seized
    /// shares.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        borrower: ManagedAddress,
        collateral_asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();

        let liquidator = self.blockchain().get_caller();
        require!(liquidator != borrower, ERROR_SELF_LIQUIDATION);

        let (debt_asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);

        let mut cache = Cache::new(self);

        self.process_liquidation(
            &liquidator,
            &borrower,
            &debt_asset,
            &amount,
            &collateral_asset,
            &mut cache,
        )
    }

    /// Opts the caller's position in `asset` into the solvency sums.
    /// Idempotent.
    #[endpoint(enterMarket)]
    fn enter_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        let caller = self.blockchain().get_caller();
        self.require_listed(&asset);
        self.enter_market_internal(&caller, &asset);
    }

    /// Opts back out; refused while shares or debt remain in the market.
    #[endpoint(exitMarket)]
    fn exit_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        let caller = self.blockchain().get_caller();
        let market = self.require_listed(&asset);
        self.exit_market_internal(&caller, &asset, &market);
    }
}
