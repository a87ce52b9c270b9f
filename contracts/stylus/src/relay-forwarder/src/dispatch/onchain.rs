use alloc::vec::Vec;

use forwarder_core::{DispatchError, Dispatcher};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    stylus_core::{
        calls::{context::Call, errors::Error as CallError, CallAccess},
        AccountAccess, Host,
    },
};

/// Forwards invoices through the contract's host with a value-carrying `call`, passing all
/// remaining gas. The host flushes the storage cache before control leaves the contract.
pub struct OnchainDispatcher<'a> {
    vm: &'a dyn Host,
}

impl<'a> OnchainDispatcher<'a> {
    pub fn new(vm: &'a dyn Host) -> Self {
        Self { vm }
    }
}

impl Dispatcher for OnchainDispatcher<'_> {
    fn has_code(&self, target: Address) -> bool {
        self.vm.code_size(target) > 0
    }

    fn dispatch(
        &mut self,
        target: Address,
        value: U256,
        payload: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        let context = Call::new().value(value);
        match self.vm.call(&context, target, payload) {
            Ok(data) => Ok(data),
            Err(CallError::Revert(data)) => Err(DispatchError::Reverted(data)),
            // Raw calls never decode return data.
            Err(CallError::AbiDecodingFailed(_)) => Err(DispatchError::Reverted(Vec::new())),
        }
    }
}
