#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Behavior when a repayment exceeds the outstanding debt.
///
/// `Refund` caps the applied amount at the debt and returns the excess to the
/// payer; `Reject` aborts the whole operation instead.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq)]
pub enum RepayPolicy {
    Refund,
    Reject,
}

/// Static configuration of a market, set once at listing time.
///
/// Rate parameters are annual rates in WAD; `kink` is the utilization
/// breakpoint of the piecewise-linear rate curve, also WAD.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub base_rate: ManagedDecimal<M, NumDecimals>,
    pub multiplier: ManagedDecimal<M, NumDecimals>,
    pub jump_multiplier: ManagedDecimal<M, NumDecimals>,
    pub kink: ManagedDecimal<M, NumDecimals>,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
    pub repay_policy: RepayPolicy,
    pub asset_decimals: NumDecimals,
}

/// Borrow principal scaled to the borrow index at the account's last touch.
///
/// Current debt is `principal * current_borrow_index / index`; the snapshot
/// is only rewritten when the account itself borrows or repays.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct BorrowSnapshot<M: ManagedTypeApi> {
    pub principal: ManagedDecimal<M, NumDecimals>,
    pub index: ManagedDecimal<M, NumDecimals>,
}

/// Point-in-time view of one account inside one market, as read by the risk
/// engine during a solvency sweep. Values reflect stored state; no accrual
/// is simulated.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountSnapshot<M: ManagedTypeApi> {
    pub shares: ManagedDecimal<M, NumDecimals>,
    pub debt: ManagedDecimal<M, NumDecimals>,
    pub exchange_rate: ManagedDecimal<M, NumDecimals>,
}

/// Registry entry the risk engine keeps per listed asset.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
    pub asset_decimals: NumDecimals,
}

/// Price feed entry as published by the oracle, WAD-denominated per whole
/// token.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: ManagedDecimal<M, NumDecimals>,
    pub timestamp: u64,
}
