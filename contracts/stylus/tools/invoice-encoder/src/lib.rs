//! Caller-side tooling for the Stylus forwarder.
//!
//! - [`encoder`] builds collection payloads and `executeCall` calldata.
//! - [`collection`] is an in-memory multi-token collection that can stand in as the relay target.

pub mod abi;
pub mod collection;
pub mod encoder;
pub mod types;

pub use forwarder_core::{relay_invoice, CallInvoice, ForwardError, MemoryWhitelist};
