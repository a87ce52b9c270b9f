use alloy_primitives::{Address, FixedBytes, U256};
use alloy_sol_types::SolCall;
use sha3::{Digest, Keccak256};

use crate::{
    abi::{ICollection, IForwarder, Invoice},
    CallInvoice,
};

fn keccak256_bytes(bytes: &[u8]) -> FixedBytes<32> {
    let mut h = Keccak256::new();
    h.update(bytes);
    let out = h.finalize();
    let mut b = [0u8; 32];
    b.copy_from_slice(out.as_slice());
    FixedBytes(b)
}

/// 4-byte function selector of a canonical Solidity signature, eg `balanceOf(address,uint256)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let h = keccak256_bytes(signature.as_bytes());
    [h[0], h[1], h[2], h[3]]
}

/// Payload for `_mint(to, collection, uri, amount, uuid)`.
pub fn encode_mint(to: Address, collection: &str, uri: &str, amount: U256, uuid: &str) -> Vec<u8> {
    ICollection::_mintCall {
        to,
        collection: collection.to_string(),
        uri: uri.to_string(),
        amount,
        uuid: uuid.to_string(),
    }
    .abi_encode()
}

/// Payload for `safeTransferFrom(from, to, id, amount, data)`.
pub fn encode_safe_transfer_from(
    from: Address,
    to: Address,
    id: U256,
    amount: U256,
    data: &[u8],
) -> Vec<u8> {
    ICollection::safeTransferFromCall {
        from,
        to,
        id,
        amount,
        data: data.to_vec().into(),
    }
    .abi_encode()
}

pub fn encode_get_supply(id: U256) -> Vec<u8> {
    ICollection::getSupplyCall { id }.abi_encode()
}

pub fn encode_balance_of(account: Address, id: U256) -> Vec<u8> {
    ICollection::balanceOfCall { account, id }.abi_encode()
}

/// Calldata for `executeCall(invoice)` on the forwarder.
pub fn encode_execute_call(invoice: &CallInvoice) -> Vec<u8> {
    IForwarder::executeCallCall {
        invoice: Invoice {
            sender: invoice.sender,
            target: invoice.target,
            value: invoice.value,
            kind: invoice.kind,
            payload: invoice.payload.clone().into(),
        },
    }
    .abi_encode()
}

/// Parse `executeCall(invoice)` calldata back into an invoice.
pub fn decode_execute_call(calldata: &[u8]) -> Result<CallInvoice, alloy_sol_types::Error> {
    let call = IForwarder::executeCallCall::abi_decode(calldata, true)?;
    let Invoice {
        sender,
        target,
        value,
        kind,
        payload,
    } = call.invoice;
    Ok(CallInvoice {
        sender,
        target,
        value,
        kind,
        payload: payload.to_vec(),
    })
}
