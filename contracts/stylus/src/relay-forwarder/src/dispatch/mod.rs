//! Dispatchers backing the relay core inside the contract.

pub mod onchain;

pub use onchain::OnchainDispatcher;
