use common_structs::MarketConfig;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-operation memoization of oracle prices and registry lookups. Nothing
/// here is persisted; the cache lives and dies with a single call, so the
/// oracle is always re-consulted on the next operation.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices: ManagedMapEncoded<
        C::Api,
        EgldOrEsdtTokenIdentifier<C::Api>,
        ManagedDecimal<C::Api, NumDecimals>,
    >,
    pub configs: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, MarketConfig<C::Api>>,
    pub pools: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, ManagedAddress<C::Api>>,
    pub price_oracle: ManagedAddress<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            prices: ManagedMapEncoded::new(),
            configs: ManagedMapEncoded::new(),
            pools: ManagedMapEncoded::new(),
            price_oracle: sc_ref.price_oracle_address().get(),
            sc_ref,
        }
    }

    /// Registry entry for a listed asset. Callers check listing first.
    pub fn get_cached_market_config(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> MarketConfig<C::Api> {
        if self.configs.contains(asset) {
            return self.configs.get(asset);
        }

        let config = self.sc_ref.asset_config(asset).get();
        self.configs.put(asset, &config);

        config
    }

    pub fn get_cached_pool_address(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedAddress<C::Api> {
        if self.pools.contains(asset) {
            return self.pools.get(asset);
        }

        let address = self.sc_ref.pools_map(asset).get();
        self.pools.put(asset, &address);

        address
    }
}
