#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_PRICE_UNAVAILABLE;
use common_structs::TimestampedPrice;

/// Minimal price source implementing the oracle interface the risk engine
/// consumes. Prices are WAD per whole token, pushed by the owner. Used as the
/// test stand-in for the production aggregator.
#[multiversx_sc::contract]
pub trait PriceOracle: common_math::SharedMathModule {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.price_feed(&asset).set(&TimestampedPrice {
            price: self.to_decimal_wad(price),
            timestamp: self.blockchain().get_block_timestamp(),
        });
    }

    /// Removes the feed entirely, turning subsequent reads into
    /// price-unavailable answers.
    #[only_owner]
    #[endpoint(dropPrice)]
    fn drop_price(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.price_feed(&asset).clear();
    }

    #[view(tryLatestPriceFeed)]
    fn try_latest_price_feed(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> OptionalValue<TimestampedPrice<Self::Api>> {
        let mapper = self.price_feed(&asset);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, asset: EgldOrEsdtTokenIdentifier) -> TimestampedPrice<Self::Api> {
        let mapper = self.price_feed(&asset);
        require!(!mapper.is_empty(), ERROR_PRICE_UNAVAILABLE);
        mapper.get()
    }

    #[view(getPriceFeed)]
    #[storage_mapper("price_feed")]
    fn price_feed(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
