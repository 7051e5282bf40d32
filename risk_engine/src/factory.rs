multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_market;
use common_structs::RepayPolicy;

use crate::storage;

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    /// Deploys a fresh market for `asset` from the configured template. The
    /// risk engine deploys it, so the risk engine owns it — which is what
    /// locks every mutating market endpoint to this contract.
    fn deploy_market(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        base_rate: &BigUint,
        multiplier: &BigUint,
        jump_multiplier: &BigUint,
        kink: &BigUint,
        reserve_factor: &BigUint,
        repay_policy: RepayPolicy,
        asset_decimals: usize,
    ) -> ManagedAddress {
        require!(
            !self.market_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .typed(proxy_market::MarketProxy)
            .init(
                asset,
                base_rate,
                multiplier,
                jump_multiplier,
                kink,
                reserve_factor,
                repay_policy,
                asset_decimals,
            )
            .from_source(self.market_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }
}
