use common_constants::WAD_PRECISION;
use common_structs::MarketParams;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// In-memory snapshot of the market's aggregate ledger for the duration of
/// one operation. Mutations happen against the cache; the `Drop` impl commits
/// everything back to storage at the end of the call. A panic unwinds the
/// whole transaction, so a partially-mutated cache can never be persisted.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub params: MarketParams<C::Api>,
    pub cash: ManagedDecimal<C::Api, NumDecimals>,
    pub borrowed: ManagedDecimal<C::Api, NumDecimals>,
    pub reserves: ManagedDecimal<C::Api, NumDecimals>,
    pub total_shares: ManagedDecimal<C::Api, NumDecimals>,
    pub borrow_index: ManagedDecimal<C::Api, NumDecimals>,
    /// Zero at the asset's decimals, for comparisons.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
    pub timestamp: u64,
    pub last_accrual_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.asset_decimals),
            cash: sc_ref.cash().get(),
            borrowed: sc_ref.borrowed().get(),
            reserves: sc_ref.reserves().get(),
            total_shares: sc_ref.total_shares().get(),
            borrow_index: sc_ref.borrow_index().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            last_accrual_timestamp: sc_ref.last_accrual_timestamp().get(),
            params,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.cash().set(&self.cash);
        self.sc_ref.borrowed().set(&self.borrowed);
        self.sc_ref.reserves().set(&self.reserves);
        self.sc_ref.total_shares().set(&self.total_shares);
        self.sc_ref.borrow_index().set(&self.borrow_index);
        self.sc_ref
            .last_accrual_timestamp()
            .set(self.last_accrual_timestamp);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn get_decimal_value(
        &self,
        value: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.asset_decimals)
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
    }

    pub fn has_cash(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.cash >= *amount
    }

    /// Shares-to-underlying rate, WAD. Defined as 1.0 while no shares exist;
    /// otherwise `(cash + borrowed - reserves) / total_shares`, rounded down.
    pub fn exchange_rate(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        if self.total_shares == self.zero {
            return self.sc_ref.wad();
        }

        let underlying = self.cash.clone() + self.borrowed.clone() - self.reserves.clone();
        self.sc_ref
            .div_floor(&underlying, &self.total_shares, WAD_PRECISION)
    }
}
