//! Ledger-wide configuration.

use bytemuck::{Pod, Zeroable};
use reward_interface::{Pubkey, authority::HasAuthority};

/// Ledger-wide configuration.
///
/// The authority is the pool factory: it registers pools and binds metrics to
/// them. It has no say over allocation amounts or holder entitlements.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct LedgerConfig {
    /// Authority that registers pools and binds metrics
    pub authority: Pubkey,
    /// Pending authority for two-step transfer.
    /// Set by `transfer_authority`, must call `accept_authority` to complete.
    pub pending_authority: Pubkey,
    /// Number of registered pools
    pub pool_count: u64,
}

impl HasAuthority for LedgerConfig {
    fn authority(&self) -> &Pubkey {
        &self.authority
    }
    fn authority_mut(&mut self) -> &mut Pubkey {
        &mut self.authority
    }
    fn pending_authority(&self) -> &Pubkey {
        &self.pending_authority
    }
    fn pending_authority_mut(&mut self) -> &mut Pubkey {
        &mut self.pending_authority
    }
}
