use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

/// Errors from the relay core.
pub use forwarder_core::{ForwardError, RegistryError};

sol! {
    /// `addWhitelist` called by someone other than the owner.
    error Unauthorized(address caller);
    /// Invoice sender is neither the owner nor whitelisted.
    error NotAuthorized(address sender);
    /// The target rejected the forwarded call; `reason` is its revert data.
    error TargetReverted(address target, bytes reason);
    /// The target has no code.
    error DispatchUnreachable(address target);
}

/// Solidity-facing errors of the `Forwarder` contract.
#[derive(SolidityError)]
pub enum ForwarderError {
    Unauthorized(Unauthorized),
    NotAuthorized(NotAuthorized),
    TargetReverted(TargetReverted),
    DispatchUnreachable(DispatchUnreachable),
}

impl From<RegistryError> for ForwarderError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Unauthorized { caller } => Self::Unauthorized(Unauthorized { caller }),
        }
    }
}

impl From<ForwardError> for ForwarderError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::NotAuthorized { sender } => Self::NotAuthorized(NotAuthorized { sender }),
            ForwardError::TargetReverted { target, reason } => Self::TargetReverted(TargetReverted {
                target,
                reason: reason.into(),
            }),
            ForwardError::DispatchUnreachable { target } => {
                Self::DispatchUnreachable(DispatchUnreachable { target })
            }
        }
    }
}
