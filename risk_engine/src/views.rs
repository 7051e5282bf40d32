multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD_PRECISION;
use common_proxies::proxy_market;
use common_structs::AccountSnapshot;

use crate::{cache::Cache, liquidity, oracle, storage, validation};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// `(liquidity, shortfall)` over stored market snapshots, USD WAD.
    #[view(getAccountLiquidity)]
    fn get_account_liquidity(
        &self,
        account: ManagedAddress,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let mut cache = Cache::new(self);
        let (liquidity, shortfall) = self.compute_account_liquidity(&account, None, &mut cache);
        (liquidity, shortfall).into()
    }

    /// USD WAD value of an account's collateral in one market, unweighted.
    #[view(getAccountCollateralValue)]
    fn get_account_collateral_value(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = self.require_listed(&asset);
        let mut cache = Cache::new(self);

        let snapshot: AccountSnapshot<Self::Api> = self
            .tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .account_snapshot(&account)
            .returns(ReturnsResult)
            .sync_call();

        let price = self.token_price(&asset, &mut cache);
        let underlying = self.mul_floor(&snapshot.shares, &snapshot.exchange_rate, WAD_PRECISION);
        self.mul_floor(&underlying, &price, WAD_PRECISION)
    }

    /// USD WAD value of an account's debt in one market.
    #[view(getAccountDebtValue)]
    fn get_account_debt_value(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let market = self.require_listed(&asset);
        let mut cache = Cache::new(self);

        let debt: ManagedDecimal<Self::Api, NumDecimals> = self
            .tx()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .current_debt(&account)
            .returns(ReturnsResult)
            .sync_call();

        let price = self.token_price(&asset, &mut cache);
        self.mul_floor(&debt, &price, WAD_PRECISION)
    }
}
