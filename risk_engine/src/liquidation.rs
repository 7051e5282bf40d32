multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD_PRECISION;
use common_errors::{ERROR_NOT_LIQUIDATABLE, ERROR_REPAY_TOO_LARGE};
use common_proxies::proxy_market;

use crate::{cache::Cache, liquidity, oracle, storage, validation};

/// Cross-market liquidation: repay a share of an underwater borrower's debt
/// in one market, seize discounted collateral shares in another.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    fn process_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        debt_asset: &EgldOrEsdtTokenIdentifier,
        debt_amount: &BigUint,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let debt_market = self.require_listed(debt_asset);
        let collateral_market = self.require_listed(collateral_asset);

        // Fresh indexes on both touched markets; the shortfall and the
        // close-factor cap are measured against accrued state. Accrual is
        // idempotent per timestamp, so debt == collateral is fine.
        self.tx()
            .to(&debt_market)
            .typed(proxy_market::MarketProxy)
            .update_indexes()
            .sync_call();
        self.tx()
            .to(&collateral_market)
            .typed(proxy_market::MarketProxy)
            .update_indexes()
            .sync_call();

        let (_, shortfall) = self.compute_account_liquidity(borrower, None, cache);
        require!(shortfall > self.wad_zero(), ERROR_NOT_LIQUIDATABLE);

        let debt_config = cache.get_cached_market_config(debt_asset);
        let repay_amount = self.to_decimal(debt_amount.clone(), debt_config.asset_decimals);

        let current_debt: ManagedDecimal<Self::Api, NumDecimals> = self
            .tx()
            .to(&debt_market)
            .typed(proxy_market::MarketProxy)
            .current_debt(borrower)
            .returns(ReturnsResult)
            .sync_call();

        let max_repay = self
            .mul_floor(&current_debt, &self.close_factor().get(), WAD_PRECISION)
            .rescale(debt_config.asset_decimals);
        require!(repay_amount <= max_repay, ERROR_REPAY_TOO_LARGE);

        let applied: ManagedDecimal<Self::Api, NumDecimals> = self
            .tx()
            .to(&debt_market)
            .typed(proxy_market::MarketProxy)
            .repay(liquidator, borrower)
            .egld_or_single_esdt(debt_asset, 0, debt_amount)
            .returns(ReturnsResult)
            .sync_call();

        let seized_shares = self.compute_seize_shares(
            &applied,
            debt_asset,
            collateral_asset,
            &collateral_market,
            cache,
        );

        self.tx()
            .to(&collateral_market)
            .typed(proxy_market::MarketProxy)
            .seize(borrower, liquidator, seized_shares.clone())
            .sync_call();

        self.liquidate_event(
            liquidator,
            borrower,
            debt_asset,
            applied.into_raw_units(),
            collateral_asset,
            seized_shares.into_raw_units(),
        );

        seized_shares
    }

    /// `repay * price_borrowed * incentive / price_collateral
    /// / exchange_rate`, with both division steps rounded down separately.
    /// Folding the divisors together would round once instead of twice and
    /// systematically favor the liquidator.
    fn compute_seize_shares(
        &self,
        repay_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        debt_asset: &EgldOrEsdtTokenIdentifier,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
        collateral_market: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let price_borrowed = self.token_price(debt_asset, cache);
        let price_collateral = self.token_price(collateral_asset, cache);
        let collateral_config = cache.get_cached_market_config(collateral_asset);

        let exchange_rate: ManagedDecimal<Self::Api, NumDecimals> = self
            .tx()
            .to(collateral_market)
            .typed(proxy_market::MarketProxy)
            .exchange_rate()
            .returns(ReturnsResult)
            .sync_call();

        let repaid_value = self.mul_floor(repay_amount, &price_borrowed, WAD_PRECISION);
        let boosted_value =
            self.mul_floor(&repaid_value, &self.liquidation_incentive().get(), WAD_PRECISION);
        let collateral_amount = self.div_floor(&boosted_value, &price_collateral, WAD_PRECISION);

        self.div_floor(&collateral_amount, &exchange_rate, WAD_PRECISION)
            .rescale(collateral_config.asset_decimals)
    }
}
