multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD_PRECISION;
use common_errors::{ERROR_INVALID_AMOUNT, ERROR_INVALID_ASSET};
use common_structs::BorrowSnapshot;

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Brings the ledger up to the current timestamp. Idempotent per unique
    /// timestamp: a second call in the same block is a no-op.
    ///
    /// One accrual window applies simple interest (`rate * elapsed`) to the
    /// borrow total, routes the reserve-factor cut into reserves, and
    /// multiplies the borrow index by `1 + factor` so that untouched borrow
    /// snapshots keep compounding implicitly.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        let elapsed = cache.timestamp - cache.last_accrual_timestamp;
        if elapsed == 0 {
            return;
        }

        let utilization = self.calc_utilization(&cache.cash, &cache.borrowed, &cache.reserves);
        let borrow_rate = self.calc_borrow_rate(&cache.params, utilization);
        let factor = self.calc_interest_factor(&borrow_rate, elapsed);

        let interest = self
            .mul_floor(&cache.borrowed, &factor, WAD_PRECISION)
            .rescale(cache.params.asset_decimals);
        let to_reserves = self
            .mul_floor(&interest, &cache.params.reserve_factor, WAD_PRECISION)
            .rescale(cache.params.asset_decimals);

        cache.borrowed += &interest;
        cache.reserves += &to_reserves;
        cache.borrow_index =
            self.mul_half_up(&cache.borrow_index, &(self.wad() + factor), WAD_PRECISION);
        cache.last_accrual_timestamp = cache.timestamp;

        self.accrue_interest_event(
            &cache.params.asset_id,
            interest.into_raw_units(),
            cache.borrow_index.into_raw_units(),
            cache.borrowed.into_raw_units(),
            cache.reserves.into_raw_units(),
        );
    }

    #[inline(always)]
    fn emit_market_update(&self, cache: &Cache<Self>) {
        self.update_market_state_event(
            cache.timestamp,
            &cache.params.asset_id,
            cache.cash.into_raw_units(),
            cache.borrowed.into_raw_units(),
            cache.reserves.into_raw_units(),
            cache.total_shares.into_raw_units(),
            cache.borrow_index.into_raw_units(),
        );
    }

    /// Extracts the incoming payment, enforcing that it is the market's asset
    /// and non-zero. The received amount is what the ledger books — never the
    /// requested one.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        require!(amount > 0u64, ERROR_INVALID_AMOUNT);

        cache.get_decimal_value(&amount)
    }

    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.asset_id.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    fn account_shares(
        &self,
        cache: &Cache<Self>,
        account: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.shares(account);
        if mapper.is_empty() {
            cache.zero.clone()
        } else {
            mapper.get()
        }
    }

    fn account_borrow_snapshot(
        &self,
        cache: &Cache<Self>,
        account: &ManagedAddress,
    ) -> BorrowSnapshot<Self::Api> {
        let mapper = self.borrow_snapshot(account);
        if mapper.is_empty() {
            BorrowSnapshot {
                principal: cache.zero.clone(),
                index: cache.borrow_index.clone(),
            }
        } else {
            mapper.get()
        }
    }

    /// Debt as of the cache's borrow index:
    /// `principal * borrow_index / snapshot_index`, rounded down.
    fn synced_debt(
        &self,
        cache: &Cache<Self>,
        snapshot: &BorrowSnapshot<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if snapshot.principal == cache.zero {
            return cache.zero.clone();
        }

        let grown = self.mul_floor(&snapshot.principal, &cache.borrow_index, WAD_PRECISION);
        self.div_floor(&grown, &snapshot.index, WAD_PRECISION)
            .rescale(cache.params.asset_decimals)
    }
}
