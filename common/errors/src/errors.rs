#![no_std]

pub static ERROR_INVALID_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_MARKET_NOT_LISTED: &[u8] = b"Market not listed for this asset.";

pub static ERROR_MARKET_ALREADY_LISTED: &[u8] = b"Market already listed for this asset.";

pub static ERROR_INSUFFICIENT_CASH: &[u8] = b"Market has insufficient cash for this borrow.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] =
    b"Account liquidity too low for this operation.";

pub static ERROR_NOT_LIQUIDATABLE: &[u8] = b"Account has no shortfall, nothing to liquidate.";

pub static ERROR_REPAY_TOO_LARGE: &[u8] = b"Repay amount exceeds the close factor limit.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Repay amount exceeds the outstanding debt.";

pub static ERROR_TOO_MANY_MARKETS: &[u8] = b"Too many entered markets for this account.";

pub static ERROR_NONZERO_BALANCE: &[u8] =
    b"Cannot exit a market with outstanding shares or debt.";

pub static ERROR_PRICE_UNAVAILABLE: &[u8] = b"Price unavailable for a listed asset.";

pub static ERROR_SELF_LIQUIDATION: &[u8] = b"Borrower cannot liquidate own position.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares deposited for this account.";

pub static ERROR_INSUFFICIENT_SEIZE_COLLATERAL: &[u8] =
    b"Borrower collateral too small for the seized amount.";

pub static ERROR_INVALID_COLLATERAL_FACTOR: &[u8] =
    b"Collateral factor outside the allowed range.";

pub static ERROR_INVALID_CLOSE_FACTOR: &[u8] = b"Close factor outside the allowed range.";

pub static ERROR_INVALID_LIQUIDATION_INCENTIVE: &[u8] =
    b"Liquidation incentive must be at least one.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Market contract template is empty.";

pub static ERROR_ORACLE_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_ASSET_DECIMALS_TOO_LARGE: &[u8] = b"Asset decimals above supported precision.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Reserve factor outside the allowed range.";
