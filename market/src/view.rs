multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD_PRECISION;
use common_structs::AccountSnapshot;

use crate::storage;

/// Read-only surface. Views compute from stored state directly (no cache, no
/// accrual simulation) so they stay usable in readonly query contexts and
/// give the risk engine the stored-snapshot semantics its solvency sweep
/// expects.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    #[view(getExchangeRate)]
    fn get_exchange_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        let total_shares = self.total_shares().get();
        let zero = self.to_decimal(BigUint::zero(), params.asset_decimals);

        if total_shares == zero {
            return self.wad();
        }

        let underlying = self.cash().get() + self.borrowed().get() - self.reserves().get();
        self.div_floor(&underlying, &total_shares, WAD_PRECISION)
    }

    /// Debt measured against the stored borrow index.
    #[view(getCurrentDebt)]
    fn get_current_debt(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        let zero = self.to_decimal(BigUint::zero(), params.asset_decimals);

        let mapper = self.borrow_snapshot(&account);
        if mapper.is_empty() {
            return zero;
        }

        let snapshot = mapper.get();
        if snapshot.principal == zero {
            return zero;
        }

        let grown = self.mul_floor(&snapshot.principal, &self.borrow_index().get(), WAD_PRECISION);
        self.div_floor(&grown, &snapshot.index, WAD_PRECISION)
            .rescale(params.asset_decimals)
    }

    /// One account's stored position plus the market's exchange rate, bundled
    /// for the risk engine's solvency sweep.
    #[view(getAccountSnapshot)]
    fn get_account_snapshot(&self, account: ManagedAddress) -> AccountSnapshot<Self::Api> {
        let params = self.params().get();
        let zero = self.to_decimal(BigUint::zero(), params.asset_decimals);

        let shares_mapper = self.shares(&account);
        let shares = if shares_mapper.is_empty() {
            zero
        } else {
            shares_mapper.get()
        };

        AccountSnapshot {
            shares,
            debt: self.get_current_debt(account),
            exchange_rate: self.get_exchange_rate(),
        }
    }

    #[view(getUtilization)]
    fn get_utilization(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_utilization(
            &self.cash().get(),
            &self.borrowed().get(),
            &self.reserves().get(),
        )
    }

    #[view(getBorrowRate)]
    fn get_borrow_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_borrow_rate(&self.params().get(), self.get_utilization())
    }

    #[view(getSupplyRate)]
    fn get_supply_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        let utilization = self.get_utilization();
        let borrow_rate = self.calc_borrow_rate(&params, utilization.clone());
        self.calc_supply_rate(utilization, borrow_rate, &params.reserve_factor)
    }
}
