multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{BorrowSnapshot, MarketParams};

/// On-chain state of one market: the aggregate ledger plus the per-account
/// maps. All monetary values are `ManagedDecimal` at the asset's decimals;
/// the borrow index is WAD.
#[multiversx_sc::module]
pub trait Storage {
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Liquid funds on hand, available for borrows and withdrawals.
    #[view(getCash)]
    #[storage_mapper("cash")]
    fn cash(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Total outstanding debt, compounded on every accrual.
    #[view(getBorrowed)]
    #[storage_mapper("borrowed")]
    fn borrowed(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Protocol-owned portion of the cash, accrued from borrow interest.
    #[view(getReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Total supply-share claims outstanding.
    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Monotonically non-decreasing compounding factor for borrows, WAD,
    /// starts at 1.0.
    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastAccrualTimestamp)]
    #[storage_mapper("last_accrual_timestamp")]
    fn last_accrual_timestamp(&self) -> SingleValueMapper<u64>;

    /// Supply-share balance of one account.
    #[view(getShares)]
    #[storage_mapper("shares")]
    fn shares(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Borrow principal and the index it was scaled at, per account.
    #[view(getBorrowSnapshot)]
    #[storage_mapper("borrow_snapshot")]
    fn borrow_snapshot(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<BorrowSnapshot<Self::Api>>;
}
