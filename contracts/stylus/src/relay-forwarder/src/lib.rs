//! Arbitrum Stylus call forwarder.
//!
//! The contract keeps an owner-administered whitelist and relays encoded calls ("invoices") for
//! the owner and for whitelisted senders. Authorization and outcome rules live in
//! `forwarder-core`; this crate supplies storage, the host-backed dispatcher and the ABI surface.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod dispatch;
pub mod errors;
pub mod forwarder;

pub use forwarder::Forwarder;
