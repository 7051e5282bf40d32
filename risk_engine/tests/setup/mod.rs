use crate::constants::*;

use common_proxies::{proxy_market, proxy_oracle, proxy_risk_engine};
use common_structs::RepayPolicy;
use multiversx_sc::imports::MultiValue2;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedDecimal,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{
        ExpectMessage, ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
    },
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(RISK_ENGINE_PATH, risk_engine::ContractBuilder);
    blockchain.register_contract(MARKET_PATH, market::ContractBuilder);
    blockchain.register_contract(ORACLE_PATH, oracle_mock::ContractBuilder);

    blockchain
}

pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn dec(amount: u64, decimals: usize) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(units(amount, decimals), decimals)
}

pub struct RiskEngineTestState {
    pub world: ScenarioWorld,
    pub engine_sc: ManagedAddress<StaticApi>,
    pub oracle_sc: ManagedAddress<StaticApi>,
    pub template_sc: ManagedAddress<StaticApi>,
    pub usdc_market: ManagedAddress<StaticApi>,
    pub wegld_market: ManagedAddress<StaticApi>,
}

impl RiskEngineTestState {
    /// Full deployment: oracle, market template, risk engine, and two listed
    /// markets (USDC at 6 decimals, WEGLD at 18), both priced at $1 with a
    /// 50% collateral factor.
    pub fn new() -> Self {
        let mut world = world();

        world
            .account(OWNER_ADDRESS)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, units(1_000_000, WEGLD_DECIMALS));
        world
            .account(SUPPLIER)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, units(1_000_000, WEGLD_DECIMALS))
            .esdt_balance(DAI_TOKEN, units(1_000_000, DAI_DECIMALS));
        world
            .account(BORROWER)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, units(1_000_000, WEGLD_DECIMALS));
        world
            .account(LIQUIDATOR)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, units(1_000_000, WEGLD_DECIMALS));

        world.current_block().block_timestamp(0);

        let oracle_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_oracle::PriceOracleProxy)
            .init()
            .code(ORACLE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        // The template is a throwaway deployment; real markets are cloned
        // from its code by the engine's factory.
        let template_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_market::MarketProxy)
            .init(
                EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
                BigUint::from(R_BASE),
                BigUint::from(R_MULTIPLIER),
                BigUint::from(R_JUMP),
                BigUint::from(KINK),
                BigUint::from(RESERVE_FACTOR),
                RepayPolicy::Refund,
                USDC_DECIMALS,
            )
            .code(MARKET_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let engine_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .init(&template_sc, &oracle_sc)
            .code(RISK_ENGINE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            engine_sc,
            oracle_sc,
            template_sc,
            usdc_market: ManagedAddress::zero(),
            wegld_market: ManagedAddress::zero(),
        };

        state.set_price(USDC_TOKEN, BigUint::from(PRICE_ONE));
        state.set_price(WEGLD_TOKEN, BigUint::from(PRICE_ONE));

        state.usdc_market = state.create_market(USDC_TOKEN, USDC_DECIMALS);
        state.wegld_market = state.create_market(WEGLD_TOKEN, WEGLD_DECIMALS);

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn create_market(
        &mut self,
        token: TestTokenIdentifier,
        decimals: usize,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .create_market(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                BigUint::from(R_BASE),
                BigUint::from(R_MULTIPLIER),
                BigUint::from(R_JUMP),
                BigUint::from(KINK),
                BigUint::from(RESERVE_FACTOR),
                RepayPolicy::Refund,
                decimals,
                BigUint::from(COLLATERAL_FACTOR),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_price(&mut self, token: TestTokenIdentifier, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_oracle::PriceOracleProxy)
            .set_price(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                price,
            )
            .run();
    }

    pub fn drop_price(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_oracle::PriceOracleProxy)
            .drop_price(EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()))
            .run();
    }

    pub fn supply(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .supply()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn supply_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .supply()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        shares: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .withdraw(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                shares,
            )
            .run();
    }

    pub fn withdraw_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        shares: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .withdraw(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                shares,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .borrow(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                amount,
            )
            .run();
    }

    pub fn borrow_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .borrow(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                amount,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        borrower: Option<TestAddress>,
    ) {
        let opt_borrower = match borrower {
            Some(account) => {
                multiversx_sc::imports::OptionalValue::Some(account.to_managed_address())
            },
            None => multiversx_sc::imports::OptionalValue::None,
        };

        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .repay(opt_borrower)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn liquidate(
        &mut self,
        from: TestAddress,
        borrower: TestAddress,
        debt_token: TestTokenIdentifier,
        debt_amount: BigUint<StaticApi>,
        collateral_token: TestTokenIdentifier,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .liquidate(
                borrower.to_managed_address(),
                EgldOrEsdtTokenIdentifier::esdt(collateral_token.to_token_identifier()),
            )
            .single_esdt(&debt_token.to_token_identifier(), 0, &debt_amount)
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: TestAddress,
        borrower: TestAddress,
        debt_token: TestTokenIdentifier,
        debt_amount: BigUint<StaticApi>,
        collateral_token: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .liquidate(
                borrower.to_managed_address(),
                EgldOrEsdtTokenIdentifier::esdt(collateral_token.to_token_identifier()),
            )
            .single_esdt(&debt_token.to_token_identifier(), 0, &debt_amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn enter_market(&mut self, from: TestAddress, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .enter_market(EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()))
            .run();
    }

    pub fn enter_market_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .enter_market(EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn exit_market(&mut self, from: TestAddress, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .exit_market(EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()))
            .run();
    }

    pub fn exit_market_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .exit_market(EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_max_markets(&mut self, max_markets: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine_sc)
            .typed(proxy_risk_engine::RiskEngineProxy)
            .set_max_markets_per_account(max_markets)
            .run();
    }

    /// `(liquidity, shortfall)` in USD WAD raw units.
    pub fn account_liquidity(
        &mut self,
        account: TestAddress,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<ManagedDecimal<StaticApi, usize>, ManagedDecimal<StaticApi, usize>> =
            self.world
                .query()
                .to(&self.engine_sc)
                .typed(proxy_risk_engine::RiskEngineProxy)
                .account_liquidity(account.to_managed_address())
                .returns(ReturnsResult)
                .run();

        let (liquidity, shortfall) = result.into_tuple();
        (
            liquidity.into_raw_units().clone(),
            shortfall.into_raw_units().clone(),
        )
    }

    pub fn market_shares(
        &mut self,
        market: ManagedAddress<StaticApi>,
        account: TestAddress,
    ) -> ManagedDecimal<StaticApi, usize> {
        self.world
            .query()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .shares(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_debt(
        &mut self,
        market: ManagedAddress<StaticApi>,
        account: TestAddress,
    ) -> ManagedDecimal<StaticApi, usize> {
        self.world
            .query()
            .to(&market)
            .typed(proxy_market::MarketProxy)
            .current_debt(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }
}
