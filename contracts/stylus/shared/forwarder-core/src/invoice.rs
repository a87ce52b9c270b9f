use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

/// ABI tuple layout of an invoice: `(sender, target, value, kind, payload)`.
pub type InvoiceTuple = (Address, Address, U256, U256, Vec<u8>);

/// A single relay request.
///
/// `payload` is the fully encoded call (selector + arguments). The relay never looks inside it;
/// authorization depends on `sender` alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallInvoice {
    /// Identity the call is made "as".
    pub sender: Address,
    /// Contract the payload is forwarded to.
    pub target: Address,
    /// Native value attached to the forwarded call.
    pub value: U256,
    /// Call category tag. Carried through as metadata only.
    pub kind: U256,
    pub payload: Vec<u8>,
}

impl CallInvoice {
    pub fn new(sender: Address, target: Address, payload: Vec<u8>) -> Self {
        Self {
            sender,
            target,
            value: U256::ZERO,
            kind: U256::ZERO,
            payload,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn with_kind(mut self, kind: U256) -> Self {
        self.kind = kind;
        self
    }
}

impl From<InvoiceTuple> for CallInvoice {
    fn from((sender, target, value, kind, payload): InvoiceTuple) -> Self {
        Self {
            sender,
            target,
            value,
            kind,
            payload,
        }
    }
}
