#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod liquidity;
pub mod storage;
pub mod utils;
pub mod view;

use common_constants::{MAX_ASSET_DECIMALS, WAD};
use common_errors::{ERROR_ASSET_DECIMALS_TOO_LARGE, ERROR_INVALID_RESERVE_FACTOR};
use common_structs::{MarketParams, RepayPolicy};

/// One lending market: the supply/borrow ledger of a single asset.
///
/// Deployed from a template by the risk engine, which becomes the owner and
/// the only caller of the mutating endpoints. The market knows nothing about
/// other markets, prices, or collateral factors; it only keeps its own books.
#[multiversx_sc::contract]
pub trait Market:
    storage::Storage
    + liquidity::LiquidityModule
    + utils::UtilsModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Rate parameters are annual WAD values; `kink` is the utilization
    /// breakpoint, `reserve_factor` the protocol's cut of accrued interest.
    #[init]
    fn init(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        base_rate: BigUint,
        multiplier: BigUint,
        jump_multiplier: BigUint,
        kink: BigUint,
        reserve_factor: BigUint,
        repay_policy: RepayPolicy,
        asset_decimals: usize,
    ) {
        require!(
            asset_decimals <= MAX_ASSET_DECIMALS,
            ERROR_ASSET_DECIMALS_TOO_LARGE
        );
        require!(
            reserve_factor < BigUint::from(WAD),
            ERROR_INVALID_RESERVE_FACTOR
        );

        self.params().set(&MarketParams {
            asset_id: asset.clone(),
            base_rate: self.to_decimal_wad(base_rate),
            multiplier: self.to_decimal_wad(multiplier),
            jump_multiplier: self.to_decimal_wad(jump_multiplier),
            kink: self.to_decimal_wad(kink),
            reserve_factor: self.to_decimal_wad(reserve_factor),
            repay_policy,
            asset_decimals,
        });

        let zero = self.to_decimal(BigUint::zero(), asset_decimals);
        self.cash().set(&zero);
        self.borrowed().set(&zero);
        self.reserves().set(&zero);
        self.total_shares().set(&zero);

        self.borrow_index().set(self.wad());

        let timestamp = self.blockchain().get_block_timestamp();
        self.last_accrual_timestamp().set(timestamp);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
