//! Relay core shared by the Stylus forwarder (on-chain) and the invoice tooling (off-chain).
//!
//! Nothing here touches a host: the registry and the dispatch primitive are traits, so the same
//! authorization and outcome rules run against contract storage or in-memory state.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod errors;
pub mod invoice;
pub mod registry;
pub mod relay;

pub use dispatch::{DispatchError, Dispatcher};
pub use errors::{ForwardError, RegistryError};
pub use invoice::{CallInvoice, InvoiceTuple};
pub use registry::{MemoryWhitelist, WhitelistRegistry};
pub use relay::{authorize, relay_invoice, InvoiceStatus};
