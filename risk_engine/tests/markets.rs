use common_structs::RepayPolicy;
use multiversx_sc::types::{BigUint, EgldOrEsdtTokenIdentifier};
use multiversx_sc_scenario::{imports::ExpectMessage, ScenarioTxRun};

pub mod constants;
pub mod setup;

use common_proxies::proxy_risk_engine;
use constants::*;
use risk_engine::{
    ERROR_INVALID_COLLATERAL_FACTOR, ERROR_MARKET_ALREADY_LISTED, ERROR_MARKET_NOT_LISTED,
    ERROR_NONZERO_BALANCE, ERROR_PRICE_UNAVAILABLE, ERROR_TOO_MANY_MARKETS,
};
use setup::*;

/// Listing is one-way and unique per asset.
#[test]
fn create_market_twice_fails() {
    let mut state = RiskEngineTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.engine_sc)
        .typed(proxy_risk_engine::RiskEngineProxy)
        .create_market(
            EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
            BigUint::from(R_BASE),
            BigUint::from(R_MULTIPLIER),
            BigUint::from(R_JUMP),
            BigUint::from(KINK),
            BigUint::from(RESERVE_FACTOR),
            RepayPolicy::Refund,
            USDC_DECIMALS,
            BigUint::from(COLLATERAL_FACTOR),
        )
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_MARKET_ALREADY_LISTED).unwrap(),
        ))
        .run();
}

/// Collateral factors are capped at 90%.
#[test]
fn collateral_factor_above_cap_fails() {
    let mut state = RiskEngineTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.engine_sc)
        .typed(proxy_risk_engine::RiskEngineProxy)
        .create_market(
            EgldOrEsdtTokenIdentifier::esdt(DAI_TOKEN.to_token_identifier()),
            BigUint::from(R_BASE),
            BigUint::from(R_MULTIPLIER),
            BigUint::from(R_JUMP),
            BigUint::from(KINK),
            BigUint::from(RESERVE_FACTOR),
            RepayPolicy::Refund,
            DAI_DECIMALS,
            BigUint::from(950_000_000_000_000_000u64),
        )
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_INVALID_COLLATERAL_FACTOR).unwrap(),
        ))
        .run();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.engine_sc)
        .typed(proxy_risk_engine::RiskEngineProxy)
        .set_collateral_factor(
            EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
            BigUint::from(950_000_000_000_000_000u64),
        )
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_INVALID_COLLATERAL_FACTOR).unwrap(),
        ))
        .run();
}

/// Operations on unlisted assets are refused outright.
#[test]
fn unlisted_asset_is_rejected() {
    let mut state = RiskEngineTestState::new();

    state.supply_error(
        SUPPLIER,
        DAI_TOKEN,
        units(100, DAI_DECIMALS),
        ERROR_MARKET_NOT_LISTED,
    );
    state.borrow_error(
        SUPPLIER,
        DAI_TOKEN,
        units(1, DAI_DECIMALS),
        ERROR_MARKET_NOT_LISTED,
    );
    state.enter_market_error(SUPPLIER, DAI_TOKEN, ERROR_MARKET_NOT_LISTED);
}

/// Membership: entering is idempotent, exiting requires a clean position.
#[test]
fn exit_market_requires_zero_balance() {
    let mut state = RiskEngineTestState::new();

    state.supply(SUPPLIER, USDC_TOKEN, units(100, USDC_DECIMALS));
    state.enter_market(SUPPLIER, USDC_TOKEN);
    state.enter_market(SUPPLIER, USDC_TOKEN); // second entry is a no-op

    state.exit_market_error(SUPPLIER, USDC_TOKEN, ERROR_NONZERO_BALANCE);

    state.withdraw(SUPPLIER, USDC_TOKEN, units(100, USDC_DECIMALS));
    state.exit_market(SUPPLIER, USDC_TOKEN);

    // Exiting a market never entered is a no-op.
    state.exit_market(SUPPLIER, WEGLD_TOKEN);
}

/// The membership ceiling bounds the solvency sweep; both the explicit entry
/// and the borrow-side auto-entry respect it.
#[test]
fn membership_ceiling_enforced() {
    let mut state = RiskEngineTestState::new();

    state.set_max_markets(1);

    state.supply(BORROWER, USDC_TOKEN, units(1000, USDC_DECIMALS));
    state.enter_market(BORROWER, USDC_TOKEN);

    state.enter_market_error(BORROWER, WEGLD_TOKEN, ERROR_TOO_MANY_MARKETS);

    // The auto-entry on borrow hits the same ceiling.
    state.supply(SUPPLIER, WEGLD_TOKEN, units(100, WEGLD_DECIMALS));
    state.borrow_error(
        BORROWER,
        WEGLD_TOKEN,
        units(1, WEGLD_DECIMALS),
        ERROR_TOO_MANY_MARKETS,
    );
}

/// A missing price for any entered market aborts every solvency-gated
/// operation; no partial computation survives.
#[test]
fn missing_price_aborts_solvency_checks() {
    let mut state = RiskEngineTestState::new();

    state.supply(SUPPLIER, WEGLD_TOKEN, units(1000, WEGLD_DECIMALS));
    state.supply(BORROWER, USDC_TOKEN, units(1000, USDC_DECIMALS));
    state.enter_market(BORROWER, USDC_TOKEN);
    state.borrow(BORROWER, WEGLD_TOKEN, units(100, WEGLD_DECIMALS));

    state.drop_price(USDC_TOKEN);

    state.borrow_error(
        BORROWER,
        WEGLD_TOKEN,
        units(1, WEGLD_DECIMALS),
        ERROR_PRICE_UNAVAILABLE,
    );
    state.withdraw_error(
        BORROWER,
        USDC_TOKEN,
        units(1, USDC_DECIMALS),
        ERROR_PRICE_UNAVAILABLE,
    );
    state.liquidate_error(
        LIQUIDATOR,
        BORROWER,
        WEGLD_TOKEN,
        units(50, WEGLD_DECIMALS),
        USDC_TOKEN,
        ERROR_PRICE_UNAVAILABLE,
    );

    // Restoring the feed restores the engine.
    state.set_price(USDC_TOKEN, BigUint::from(PRICE_ONE));
    state.borrow(BORROWER, WEGLD_TOKEN, units(1, WEGLD_DECIMALS));
}

/// Paused engine refuses user operations until unpaused.
#[test]
fn pause_blocks_user_operations() {
    let mut state = RiskEngineTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.engine_sc)
        .typed(proxy_risk_engine::RiskEngineProxy)
        .pause_endpoint()
        .run();

    state.supply_error(
        SUPPLIER,
        USDC_TOKEN,
        units(100, USDC_DECIMALS),
        b"Contract is paused",
    );

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.engine_sc)
        .typed(proxy_risk_engine::RiskEngineProxy)
        .unpause_endpoint()
        .run();

    state.supply(SUPPLIER, USDC_TOKEN, units(100, USDC_DECIMALS));
}

/// Supplying interest-bearing collateral and withdrawing it round-trips at
/// the same exchange rate when no time has passed.
#[test]
fn supply_withdraw_round_trip() {
    let mut state = RiskEngineTestState::new();

    state.supply(SUPPLIER, USDC_TOKEN, units(1000, USDC_DECIMALS));

    let market = state.usdc_market.clone();
    let shares = state.market_shares(market, SUPPLIER);
    assert_eq!(shares, dec(1000, USDC_DECIMALS));

    state.withdraw(SUPPLIER, USDC_TOKEN, units(1000, USDC_DECIMALS));

    state
        .world
        .check_account(SUPPLIER)
        .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS));
}
