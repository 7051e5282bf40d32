use common_structs::MarketConfig;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Market contract address per listed asset. An empty entry means the
    /// asset is not listed; listing is one-way, entries are never removed.
    #[view(getMarketAddress)]
    #[storage_mapper("pools_map")]
    fn pools_map(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// All listed assets, in listing order.
    #[view(getMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Risk parameters of a listed asset.
    #[view(getMarketConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketConfig<Self::Api>>;

    /// Markets an account has entered. Only entered markets count toward the
    /// account's aggregate solvency, and only they are swept when computing
    /// it — hence the ceiling below.
    #[view(getAccountMarkets)]
    #[storage_mapper("account_markets")]
    fn account_markets(
        &self,
        account: &ManagedAddress,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Fraction of a borrow repayable in one liquidation, WAD.
    #[view(getCloseFactor)]
    #[storage_mapper("close_factor")]
    fn close_factor(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Bonus multiplier paid to liquidators in seized collateral, WAD, > 1.
    #[view(getLiquidationIncentive)]
    #[storage_mapper("liquidation_incentive")]
    fn liquidation_incentive(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getMaxMarketsPerAccount)]
    #[storage_mapper("max_markets_per_account")]
    fn max_markets_per_account(&self) -> SingleValueMapper<usize>;

    #[view(getPriceOracleAddress)]
    #[storage_mapper("price_oracle_address")]
    fn price_oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Template the market factory deploys new pools from.
    #[view(getMarketTemplateAddress)]
    #[storage_mapper("market_template_address")]
    fn market_template_address(&self) -> SingleValueMapper<ManagedAddress>;
}
