//! The call-forwarding capability the relay depends on.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

/// Failure of a raw dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The target executed and reverted with this data.
    Reverted(Vec<u8>),
    /// The call never reached executable code.
    Unreachable,
}

/// Bytes-in, bytes-out call primitive, implemented by whatever environment hosts the target.
///
/// On-chain this is a host `call`; off-chain it is an in-memory model of the target contract.
pub trait Dispatcher {
    /// Whether `target` carries code able to accept a call.
    fn has_code(&self, target: Address) -> bool;

    fn dispatch(
        &mut self,
        target: Address,
        value: U256,
        payload: &[u8],
    ) -> Result<Vec<u8>, DispatchError>;
}

impl<D: Dispatcher + ?Sized> Dispatcher for &mut D {
    fn has_code(&self, target: Address) -> bool {
        (**self).has_code(target)
    }

    fn dispatch(
        &mut self,
        target: Address,
        value: U256,
        payload: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        (**self).dispatch(target, value, payload)
    }
}
