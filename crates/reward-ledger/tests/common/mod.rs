//! Shared test helpers for reward-ledger tests.

#![allow(dead_code)]

pub mod mock_accounts;
pub mod setup;

pub use mock_accounts::*;
pub use setup::*;
