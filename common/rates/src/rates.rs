#![no_std]
use common_constants::{SECONDS_PER_YEAR, WAD_PRECISION};
use common_structs::MarketParams;

multiversx_sc::imports!();

/// Pure interest-rate model: a piecewise-linear ("kinked") curve over
/// utilization. No storage; every function is a function of its inputs only.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Fraction of the market's liquidity currently borrowed out:
    /// `borrowed / (cash + borrowed - reserves)`, WAD.
    ///
    /// Both a zero borrow total and a zero denominator yield zero utilization
    /// rather than failing.
    fn calc_utilization(
        &self,
        cash: &ManagedDecimal<Self::Api, NumDecimals>,
        borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        reserves: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let zero = self.to_decimal(BigUint::zero(), borrowed.scale());
        if *borrowed == zero {
            return self.wad_zero();
        }

        let denominator = cash.clone() + borrowed.clone() - reserves.clone();
        if denominator == zero {
            return self.wad_zero();
        }

        self.div_half_up(borrowed, &denominator, WAD_PRECISION)
    }

    /// Per-second borrow rate (WAD) for the given utilization.
    ///
    /// Below the kink: `base + utilization * multiplier`. At or above it:
    /// `base + kink * multiplier + (utilization - kink) * jump_multiplier`.
    /// The annual result is divided down to a per-second rate.
    fn calc_borrow_rate(
        &self,
        params: &MarketParams<Self::Api>,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual_rate = if utilization < params.kink {
            params.base_rate.clone()
                + self.mul_half_up(&utilization, &params.multiplier, WAD_PRECISION)
        } else {
            let kink_rate = params.base_rate.clone()
                + self.mul_half_up(&params.kink, &params.multiplier, WAD_PRECISION);
            let excess_utilization = utilization - params.kink.clone();
            kink_rate
                + self.mul_half_up(&excess_utilization, &params.jump_multiplier, WAD_PRECISION)
        };

        self.div_half_up(
            &annual_rate,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            WAD_PRECISION,
        )
    }

    /// Per-second supply rate:
    /// `borrow_rate * (1 - reserve_factor) * utilization`.
    fn calc_supply_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if utilization == self.wad_zero() {
            return self.wad_zero();
        }

        let net_share = self.wad() - reserve_factor.clone();
        self.mul_half_up(
            &self.mul_half_up(&borrow_rate, &net_share, WAD_PRECISION),
            &utilization,
            WAD_PRECISION,
        )
    }

    /// Simple-interest growth over one accrual window: `rate * elapsed`.
    ///
    /// Compounding happens across windows, not within one; each accrual
    /// multiplies the borrow index by `1 + factor`.
    fn calc_interest_factor(
        &self,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if elapsed == 0 {
            return self.wad_zero();
        }

        self.mul_half_up(
            borrow_rate,
            &self.to_decimal(BigUint::from(elapsed), 0),
            WAD_PRECISION,
        )
    }
}
