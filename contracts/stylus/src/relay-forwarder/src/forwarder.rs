//! Whitelist-gated call forwarder.
//!
//! Design notes:
//! - The owner is the only account able to grow the whitelist, and is always allowed to relay.
//! - Invoice payloads are opaque; authorization depends on the declared sender alone.
//! - A failed relay reverts the whole transaction, so the forwarder never applies half an invoice.

use alloc::vec::Vec;

use alloy_sol_types::sol;
use forwarder_core::{relay_invoice, CallInvoice, RegistryError, WhitelistRegistry};
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, U256},
    console,
    prelude::*,
    stylus_core::log,
};

use crate::{dispatch::OnchainDispatcher, errors::ForwarderError};

sol! {
    event WhitelistAdded(address indexed account);
    event CallExecuted(address indexed sender, address indexed target, uint256 value, uint256 kind);
}

sol_storage! {
    #[entrypoint]
    pub struct Forwarder {
        /// Deploying account; sole whitelist administrator.
        address owner;

        /// Accounts calls may be relayed for. Append-only.
        mapping(address => bool) whitelist;
    }
}

#[public]
impl Forwarder {
    /// Deployment goes through a factory, so the transaction origin is the deploying account.
    #[constructor]
    pub fn constructor(&mut self) {
        let owner = self.vm().tx_origin();
        self.owner.set(owner);
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    pub fn is_whitelist(&self, account: Address) -> bool {
        self.whitelist.get(account)
    }

    /// Owner-only. Adding an existing member is a no-op.
    pub fn add_whitelist(&mut self, account: Address) -> Result<(), ForwarderError> {
        let caller = self.vm().msg_sender();
        if caller != self.owner.get() {
            return Err(RegistryError::Unauthorized { caller }.into());
        }
        if !self.whitelist.get(account) {
            self.whitelist.insert(account, true);
            log(self.vm(), WhitelistAdded { account });
        }
        Ok(())
    }

    /// Relay `invoice = (sender, target, value, kind, payload)` and return the target's return data.
    #[payable]
    pub fn execute_call(
        &mut self,
        invoice: (Address, Address, U256, U256, Bytes),
    ) -> Result<Bytes, ForwarderError> {
        let (sender, target, value, kind, payload) = invoice;
        let payload: Vec<u8> = payload.into();
        let invoice = CallInvoice::from((sender, target, value, kind, payload));

        let outcome = {
            let mut dispatcher = OnchainDispatcher::new(self.vm());
            relay_invoice(&*self, &mut dispatcher, invoice)
        };

        let data: Vec<u8> = match outcome {
            Ok(data) => data,
            Err(err) => {
                console!("relay for {sender} to {target} failed: {err}");
                return Err(err.into());
            }
        };

        console!("relayed {sender} -> {target}: {} bytes returned", data.len());
        log(
            self.vm(),
            CallExecuted {
                sender,
                target,
                value,
                kind,
            },
        );
        Ok(data.into())
    }
}

impl WhitelistRegistry for Forwarder {
    fn owner(&self) -> Address {
        self.owner.get()
    }

    fn is_whitelisted(&self, account: Address) -> bool {
        self.whitelist.get(account)
    }
}
