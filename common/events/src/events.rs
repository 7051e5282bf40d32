#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_market")]
    fn create_market_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] market: &ManagedAddress,
        #[indexed] collateral_factor: &BigUint,
    );

    #[event("update_collateral_factor")]
    fn update_collateral_factor_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_factor: &BigUint,
    );

    #[event("update_risk_params")]
    fn update_risk_params_event(
        &self,
        #[indexed] close_factor: &BigUint,
        #[indexed] liquidation_incentive: &BigUint,
        #[indexed] max_markets_per_account: usize,
    );

    /// Emitted by a market on every accrual that advances the clock, with the
    /// deltas of the accrual window.
    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] interest_accrued: &BigUint,
        #[indexed] borrow_index: &BigUint,
        #[indexed] borrowed: &BigUint,
        #[indexed] reserves: &BigUint,
    );

    /// Full market snapshot, emitted after every ledger mutation.
    #[event("update_market_state")]
    fn update_market_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] cash: &BigUint,
        #[indexed] borrowed: &BigUint,
        #[indexed] reserves: &BigUint,
        #[indexed] total_shares: &BigUint,
        #[indexed] borrow_index: &BigUint,
    );

    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] applied: &BigUint,
        #[indexed] refunded: &BigUint,
    );

    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] debt_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] repaid: &BigUint,
        #[indexed] collateral_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] seized_shares: &BigUint,
    );

    #[event("enter_market")]
    fn enter_market_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("exit_market")]
    fn exit_market_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("claim_reserves")]
    fn claim_reserves_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] to: &ManagedAddress,
    );
}
