multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{MAX_COLLATERAL_FACTOR, WAD};
use common_errors::{
    ERROR_INVALID_CLOSE_FACTOR, ERROR_INVALID_COLLATERAL_FACTOR,
    ERROR_INVALID_LIQUIDATION_INCENTIVE, ERROR_MARKET_ALREADY_LISTED,
};
use common_proxies::proxy_market;
use common_structs::{MarketConfig, RepayPolicy};

use crate::{factory, storage, validation};

/// Privileged configuration surface. Authorization is the chain's ownership
/// predicate; every endpoint here is owner-only.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + factory::FactoryModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lists a new market: deploys its ledger contract from the template and
    /// registers it with the given collateral factor. Listing is one-way; a
    /// listed asset can never be unlisted, only have its factor adjusted.
    #[only_owner]
    #[endpoint(createMarket)]
    fn create_market(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        repay_policy: RepayPolicy,
        asset_decimals: usize,
        collateral_factor: BigUint,
    ) -> ManagedAddress {
        require!(!self.is_listed(&asset), ERROR_MARKET_ALREADY_LISTED);
        require!(
            collateral_factor <= BigUint::from(MAX_COLLATERAL_FACTOR),
            ERROR_INVALID_COLLATERAL_FACTOR
        );

        let market = self.deploy_market(
            &asset,
            &base_rate,
            &multiplier,
            &jump_multiplier,
            &kink,
            &reserve_factor,
            repay_policy,
            asset_decimals,
        );

        self.pools_map(&asset).set(&market);
        self.markets().insert(asset.clone());
        self.asset_config(&asset).set(&MarketConfig {
            collateral_factor: self.to_decimal_wad(collateral_factor.clone()),
            asset_decimals,
        });

        self.create_market_event(&asset, &market, &collateral_factor);

        market
    }

    #[only_owner]
    #[endpoint(setCollateralFactor)]
    fn set_collateral_factor(&self, asset: EgldOrEsdtTokenIdentifier, collateral_factor: BigUint) {
        self.require_listed(&asset);
        require!(
            collateral_factor <= BigUint::from(MAX_COLLATERAL_FACTOR),
            ERROR_INVALID_COLLATERAL_FACTOR
        );

        self.asset_config(&asset).update(|config| {
            config.collateral_factor = self.to_decimal_wad(collateral_factor.clone());
        });

        self.update_collateral_factor_event(&asset, &collateral_factor);
    }

    #[only_owner]
    #[endpoint(setCloseFactor)]
    fn set_close_factor(&self, close_factor: BigUint) {
        require!(
            close_factor > 0u64 && close_factor <= BigUint::from(WAD),
            ERROR_INVALID_CLOSE_FACTOR
        );

        self.close_factor().set(self.to_decimal_wad(close_factor));
        self.emit_risk_params();
    }

    #[only_owner]
    #[endpoint(setLiquidationIncentive)]
    fn set_liquidation_incentive(&self, liquidation_incentive: BigUint) {
        require!(
            liquidation_incentive >= BigUint::from(WAD),
            ERROR_INVALID_LIQUIDATION_INCENTIVE
        );

        self.liquidation_incentive()
            .set(self.to_decimal_wad(liquidation_incentive));
        self.emit_risk_params();
    }

    #[only_owner]
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        self.price_oracle_address().set(&price_oracle);
    }

    #[only_owner]
    #[endpoint(setMaxMarketsPerAccount)]
    fn set_max_markets_per_account(&self, max_markets: usize) {
        self.max_markets_per_account().set(max_markets);
        self.emit_risk_params();
    }

    /// Pulls accumulated protocol reserves out of a market.
    #[only_owner]
    #[endpoint(claimMarketReserves)]
    fn claim_market_reserves(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        to: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = self.require_listed(&asset);

        self.tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .claim_reserves(&to)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn emit_risk_params(&self) {
        self.update_risk_params_event(
            self.close_factor().get().into_raw_units(),
            self.liquidation_incentive().get().into_raw_units(),
            self.max_markets_per_account().get(),
        );
    }
}
