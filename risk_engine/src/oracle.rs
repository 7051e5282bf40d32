multiversx_sc::imports!();

use common_errors::ERROR_PRICE_UNAVAILABLE;
use common_proxies::proxy_oracle;
use common_structs::TimestampedPrice;

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// WAD price of one whole token, memoized per operation.
    ///
    /// A missing feed aborts the entire operation. Treating an unpriced asset
    /// as worthless would let its debt vanish from the solvency sums while
    /// its collateral is seized — aborting is the only safe answer.
    fn token_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if cache.prices.contains(asset) {
            return cache.prices.get(asset);
        }

        let feed: OptionalValue<TimestampedPrice<Self::Api>> = self
            .tx()
            .to(&cache.price_oracle)
            .typed(proxy_oracle::PriceOracleProxy)
            .try_latest_price_feed(asset)
            .returns(ReturnsResult)
            .sync_call();

        match feed {
            OptionalValue::Some(feed) => {
                cache.prices.put(asset, &feed.price);
                feed.price
            },
            OptionalValue::None => sc_panic!(ERROR_PRICE_UNAVAILABLE),
        }
    }
}
