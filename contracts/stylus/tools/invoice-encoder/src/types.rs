use alloy_primitives::U256;
use forwarder_core::InvoiceStatus;
use serde::Serialize;

use crate::CallInvoice;

/// `kind` tag for mint-style invoices.
pub const KIND_MINT: U256 = U256::ZERO;
/// `kind` tag for transfer-style invoices.
pub const KIND_TRANSFER: U256 = U256::from_limbs([1, 0, 0, 0]);

/// Printable view of an invoice together with the `executeCall` calldata that carries it.
#[derive(Clone, Debug, Serialize)]
pub struct EncodedInvoice {
    pub sender: String,
    pub target: String,
    pub value: String,
    pub kind: String,
    /// Hex-encoded payload (selector + arguments).
    pub payload: String,
    /// Hex-encoded `executeCall(invoice)` calldata.
    pub calldata: String,
    /// Always `pending`: the invoice has been built but not yet relayed.
    pub status: String,
}

impl EncodedInvoice {
    pub fn new(invoice: &CallInvoice, calldata: &[u8]) -> Self {
        Self {
            sender: invoice.sender.to_string(),
            target: invoice.target.to_string(),
            value: invoice.value.to_string(),
            kind: invoice.kind.to_string(),
            payload: format!("0x{}", hex::encode(&invoice.payload)),
            calldata: format!("0x{}", hex::encode(calldata)),
            status: InvoiceStatus::Pending.to_string(),
        }
    }
}
