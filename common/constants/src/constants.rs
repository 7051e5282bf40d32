#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Hard ceiling on collateral factors (90%).
pub const MAX_COLLATERAL_FACTOR: u128 = 900_000_000_000_000_000;

/// Default fraction of a borrow repayable in a single liquidation (50%).
pub const DEFAULT_CLOSE_FACTOR: u128 = 500_000_000_000_000_000;

/// Default bonus multiplier paid to liquidators in seized collateral (1.08).
pub const DEFAULT_LIQUIDATION_INCENTIVE: u128 = 1_080_000_000_000_000_000;

/// Default bound on the number of markets an account may enter. Keeps the
/// cost of a full solvency sweep bounded.
pub const DEFAULT_MAX_MARKETS_PER_ACCOUNT: usize = 20;

/// Largest asset decimal precision the ledger accepts. Amounts are rescaled
/// to WAD during valuation, which only upscales while decimals stay at or
/// below it.
pub const MAX_ASSET_DECIMALS: usize = 18;
