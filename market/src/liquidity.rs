multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD_PRECISION;
use common_errors::{
    ERROR_INSUFFICIENT_CASH, ERROR_INSUFFICIENT_SEIZE_COLLATERAL, ERROR_INSUFFICIENT_SHARES,
    ERROR_INVALID_AMOUNT, ERROR_REPAY_EXCEEDS_DEBT,
};
use common_structs::{BorrowSnapshot, RepayPolicy};

use crate::{cache::Cache, storage, utils, view};

/// The per-market ledger operations. Every endpoint is owner-only: the risk
/// engine owns the market and is the single caller, having already run the
/// cross-market checks the ledger itself cannot see.
#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues interest up to the current timestamp without any other effect.
    #[only_owner]
    #[endpoint(updateIndexes)]
    fn update_indexes(&self) {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        self.emit_market_update(&cache);
    }

    /// Books the received payment as supplied collateral, minting shares at
    /// the pre-mint exchange rate (rounded down). Returns the minted shares.
    #[only_owner]
    #[payable("*")]
    #[endpoint(supply)]
    fn supply(&self, account: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);

        let amount = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        let rate = cache.exchange_rate();
        let shares = self
            .div_floor(&amount, &rate, WAD_PRECISION)
            .rescale(cache.params.asset_decimals);

        let held = self.account_shares(&cache, &account);
        self.shares(&account).set(held + shares.clone());

        cache.total_shares += &shares;
        cache.cash += &amount;

        self.supply_event(
            &account,
            &cache.params.asset_id,
            amount.into_raw_units(),
            shares.into_raw_units(),
        );
        self.emit_market_update(&cache);

        shares
    }

    /// Burns `shares` and pays out `shares * exchange_rate` (rounded down).
    /// Returns the paid amount.
    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        account: ManagedAddress,
        shares: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        require!(shares > cache.zero, ERROR_INVALID_AMOUNT);

        let held = self.account_shares(&cache, &account);
        require!(shares <= held, ERROR_INSUFFICIENT_SHARES);

        let rate = cache.exchange_rate();
        let amount = self
            .mul_floor(&shares, &rate, WAD_PRECISION)
            .rescale(cache.params.asset_decimals);

        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        self.shares(&account).set(held - shares.clone());
        cache.total_shares -= &shares;
        cache.cash -= &amount;

        self.send_asset(&cache, &amount, &account);

        self.withdraw_event(
            &account,
            &cache.params.asset_id,
            amount.into_raw_units(),
            shares.into_raw_units(),
        );
        self.emit_market_update(&cache);

        amount
    }

    /// Pays `amount` out to the borrower and rolls it into a fresh borrow
    /// snapshot taken at the current index.
    #[only_owner]
    #[endpoint(borrow)]
    fn borrow(&self, account: ManagedAddress, amount: ManagedDecimal<Self::Api, NumDecimals>) {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        require!(amount > cache.zero, ERROR_INVALID_AMOUNT);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        let snapshot = self.account_borrow_snapshot(&cache, &account);
        let debt = self.synced_debt(&cache, &snapshot);
        let principal = debt + amount.clone();

        self.borrow_snapshot(&account).set(BorrowSnapshot {
            principal: principal.clone(),
            index: cache.borrow_index.clone(),
        });

        cache.borrowed += &amount;
        cache.cash -= &amount;

        self.send_asset(&cache, &amount, &account);

        self.borrow_event(
            &account,
            &cache.params.asset_id,
            amount.into_raw_units(),
            principal.into_raw_units(),
        );
        self.emit_market_update(&cache);
    }

    /// Applies the received payment against the borrower's debt. What happens
    /// to an overpayment depends on the market's repay policy: `Refund`
    /// returns the excess to the payer, `Reject` aborts. Returns the applied
    /// amount.
    #[only_owner]
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(
        &self,
        payer: ManagedAddress,
        borrower: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);

        let payment = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        let snapshot = self.account_borrow_snapshot(&cache, &borrower);
        let debt = self.synced_debt(&cache, &snapshot);

        if payment > debt && cache.params.repay_policy == RepayPolicy::Reject {
            sc_panic!(ERROR_REPAY_EXCEEDS_DEBT);
        }

        let applied = self.get_min(payment.clone(), debt.clone());
        let excess = payment - applied.clone();

        self.borrow_snapshot(&borrower).set(BorrowSnapshot {
            principal: debt - applied.clone(),
            index: cache.borrow_index.clone(),
        });

        // Aggregate debt shrinks by at most itself; per-account rounding dust
        // must not underflow the total.
        let from_totals = self.get_min(applied.clone(), cache.borrowed.clone());
        cache.borrowed -= &from_totals;
        cache.cash += &applied;

        if excess > cache.zero {
            self.send_asset(&cache, &excess, &payer);
        }

        self.repay_event(
            &payer,
            &borrower,
            &cache.params.asset_id,
            applied.into_raw_units(),
            excess.into_raw_units(),
        );
        self.emit_market_update(&cache);

        applied
    }

    /// Moves seized shares from the borrower to the liquidator. Aggregate
    /// supply is untouched; only ownership changes.
    #[only_owner]
    #[endpoint(seize)]
    fn seize(
        &self,
        borrower: ManagedAddress,
        liquidator: ManagedAddress,
        shares: ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        let held = self.account_shares(&cache, &borrower);
        require!(shares <= held, ERROR_INSUFFICIENT_SEIZE_COLLATERAL);

        let liquidator_held = self.account_shares(&cache, &liquidator);
        self.shares(&borrower).set(held - shares.clone());
        self.shares(&liquidator).set(liquidator_held + shares);

        self.emit_market_update(&cache);
    }

    /// Transfers accumulated protocol reserves out, bounded by available
    /// cash. Returns the claimed amount.
    #[only_owner]
    #[endpoint(claimReserves)]
    fn claim_reserves(&self, to: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        let amount = self.get_min(cache.reserves.clone(), cache.cash.clone());
        cache.reserves -= &amount;
        cache.cash -= &amount;

        self.send_asset(&cache, &amount, &to);

        self.claim_reserves_event(&cache.params.asset_id, amount.into_raw_units(), &to);
        self.emit_market_update(&cache);

        amount
    }
}
