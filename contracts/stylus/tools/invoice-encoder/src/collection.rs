//! In-memory multi-token collection for off-chain testing.
//!
//! This can be used as the relay target to exercise invoices end to end
//! without requiring on-chain state. It decodes the same ABI the deployed
//! collection exposes and answers with ABI-encoded return data.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use alloy_sol_types::{Revert, SolError, SolInterface, SolValue};
use forwarder_core::{DispatchError, Dispatcher};

use crate::abi::ICollection::{self, ICollectionCalls};

/// Metadata recorded at mint time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    pub collection: String,
    pub uri: String,
    pub uuid: String,
}

/// Multi-token ledger deployed at a single address.
///
/// Token ids are allocated sequentially from zero. The model trusts its caller (the forwarder):
/// there are no operator approvals.
#[derive(Clone, Debug)]
pub struct MemoryCollection {
    address: Address,
    next_id: U256,
    supply: BTreeMap<U256, U256>,
    balances: BTreeMap<(Address, U256), U256>,
    tokens: BTreeMap<U256, TokenInfo>,
}

impl MemoryCollection {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            next_id: U256::ZERO,
            supply: BTreeMap::new(),
            balances: BTreeMap::new(),
            tokens: BTreeMap::new(),
        }
    }

    pub fn supply(&self, id: U256) -> U256 {
        self.supply.get(&id).copied().unwrap_or_default()
    }

    pub fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.balances
            .get(&(account, id))
            .copied()
            .unwrap_or_default()
    }

    pub fn token(&self, id: U256) -> Option<&TokenInfo> {
        self.tokens.get(&id)
    }

    fn execute(&mut self, payload: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
        // Unknown selectors and malformed arguments revert without data, like a Solidity fallback miss.
        let call = ICollectionCalls::abi_decode(payload, true).map_err(|_| Vec::new())?;
        match call {
            ICollectionCalls::_mint(ICollection::_mintCall {
                to,
                collection,
                uri,
                amount,
                uuid,
            }) => {
                if to == Address::ZERO {
                    return Err(revert("ERC1155: mint to the zero address"));
                }
                let id = self.next_id;
                self.next_id += U256::from(1u64);
                self.supply.insert(id, amount);
                self.credit(to, id, amount);
                self.tokens.insert(
                    id,
                    TokenInfo {
                        collection,
                        uri,
                        uuid,
                    },
                );
                Ok(id.abi_encode())
            }
            ICollectionCalls::safeTransferFrom(ICollection::safeTransferFromCall {
                from,
                to,
                id,
                amount,
                ..
            }) => {
                if to == Address::ZERO {
                    return Err(revert("ERC1155: transfer to the zero address"));
                }
                let from_balance = self.balance_of(from, id);
                if from_balance < amount {
                    return Err(revert("ERC1155: insufficient balance for transfer"));
                }
                self.balances.insert((from, id), from_balance - amount);
                self.credit(to, id, amount);
                Ok(Vec::new())
            }
            ICollectionCalls::getSupply(ICollection::getSupplyCall { id }) => {
                Ok(self.supply(id).abi_encode())
            }
            ICollectionCalls::balanceOf(ICollection::balanceOfCall { account, id }) => {
                Ok(self.balance_of(account, id).abi_encode())
            }
            ICollectionCalls::uri(ICollection::uriCall { id }) => {
                let uri = self
                    .tokens
                    .get(&id)
                    .map(|token| token.uri.clone())
                    .unwrap_or_default();
                Ok(uri.abi_encode())
            }
        }
    }

    fn credit(&mut self, account: Address, id: U256, amount: U256) {
        let balance = self.balances.entry((account, id)).or_insert(U256::ZERO);
        *balance += amount;
    }
}

impl Dispatcher for MemoryCollection {
    fn has_code(&self, target: Address) -> bool {
        target == self.address
    }

    fn dispatch(
        &mut self,
        target: Address,
        value: U256,
        payload: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        if target != self.address {
            return Err(DispatchError::Unreachable);
        }
        // Every collection entrypoint is non-payable.
        if value != U256::ZERO {
            return Err(DispatchError::Reverted(Vec::new()));
        }
        self.execute(payload).map_err(DispatchError::Reverted)
    }
}

/// `Error(string)` revert data.
fn revert(reason: &str) -> Vec<u8> {
    Revert {
        reason: reason.to_string(),
    }
    .abi_encode()
}
