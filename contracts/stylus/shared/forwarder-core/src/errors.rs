use alloc::vec::Vec;
use core::fmt;

use alloy_primitives::Address;

/// Errors from whitelist mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Only the registry owner may add members.
    Unauthorized { caller: Address },
}

/// Errors from relaying an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardError {
    /// The declared sender is neither the owner nor whitelisted. Nothing was dispatched.
    NotAuthorized { sender: Address },
    /// The target ran and rejected the call. `reason` is its revert data, untouched.
    TargetReverted { target: Address, reason: Vec<u8> },
    /// The target cannot accept calls at all (no code).
    DispatchUnreachable { target: Address },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized { caller } => write!(f, "{caller} is not the registry owner"),
        }
    }
}

impl fmt::Display for ForwardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthorized { sender } => write!(f, "{sender} is not authorized to relay"),
            Self::TargetReverted { target, reason } => {
                write!(f, "call to {target} reverted ({} bytes of revert data)", reason.len())
            }
            Self::DispatchUnreachable { target } => write!(f, "{target} has no code to call"),
        }
    }
}
