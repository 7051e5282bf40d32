multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_AMOUNT, ERROR_MARKET_NOT_LISTED};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Listing gate: returns the market address or aborts.
    fn require_listed(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let mapper = self.pools_map(asset);
        require!(!mapper.is_empty(), ERROR_MARKET_NOT_LISTED);
        mapper.get()
    }

    fn is_listed(&self, asset: &EgldOrEsdtTokenIdentifier) -> bool {
        !self.pools_map(asset).is_empty()
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &0u64, ERROR_INVALID_AMOUNT);
    }
}
