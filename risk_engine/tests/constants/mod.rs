use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const SUPPLIER: TestAddress = TestAddress::new("supplier");
pub const BORROWER: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR: TestAddress = TestAddress::new("liquidator");

pub const RISK_ENGINE_PATH: MxscPath = MxscPath::new("output/risk-engine.mxsc.json");
pub const MARKET_PATH: MxscPath = MxscPath::new("../market/output/market.mxsc.json");
pub const ORACLE_PATH: MxscPath = MxscPath::new("../oracle_mock/output/oracle-mock.mxsc.json");

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: usize = 6;

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const WEGLD_DECIMALS: usize = 18;

/// Never listed; used to exercise the listing gate.
pub const DAI_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("DAI-abcdef");
pub const DAI_DECIMALS: usize = 18;

pub const WAD: u64 = 1_000_000_000_000_000_000;

pub const R_BASE: u64 = 20_000_000_000_000_000; // 2% annual
pub const R_MULTIPLIER: u64 = 100_000_000_000_000_000; // 10% annual across the kink range
pub const R_JUMP: u64 = 1_000_000_000_000_000_000; // 100% annual past the kink
pub const KINK: u64 = 800_000_000_000_000_000; // 80%
pub const RESERVE_FACTOR: u64 = 100_000_000_000_000_000; // 10%

pub const COLLATERAL_FACTOR: u64 = 500_000_000_000_000_000; // 50%
pub const PRICE_ONE: u64 = WAD; // $1 per whole token

pub const SECONDS_PER_YEAR: u64 = 31_556_926;
