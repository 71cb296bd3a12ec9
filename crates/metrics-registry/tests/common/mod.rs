//! Shared helpers for metrics-registry tests.

#![allow(dead_code)]

use metrics_registry::{MetricsRegistry, RegistryError};
use reward_interface::Pubkey;

pub const OWNER: Pubkey = [1u8; 32];
pub const FACTORY: Pubkey = [2u8; 32];
pub const STRANGER: Pubkey = [3u8; 32];

/// Deterministic member address for index `n`.
pub fn group(n: u8) -> Pubkey {
    let mut address = [0xA0u8; 32];
    address[31] = n;
    address
}

/// Fresh registry owned by `OWNER` with `FACTORY` as the factory.
pub fn registry() -> MetricsRegistry {
    MetricsRegistry::new(OWNER, FACTORY)
}

/// Assert that an operation failed with `expected`, printing its reason.
pub fn assert_fails<T: std::fmt::Debug>(result: Result<T, RegistryError>, expected: RegistryError) {
    match result {
        Err(err) => assert_eq!(err, expected, "expected '{}', got '{}'", expected, err),
        Ok(value) => panic!("expected '{}', got Ok({:?})", expected, value),
    }
}
