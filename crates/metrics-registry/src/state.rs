//! Metrics registry configuration.

use bytemuck::{Pod, Zeroable};
use reward_interface::{Pubkey, authority::HasAuthority};

use crate::RegistryError;

/// Registry configuration singleton.
///
/// The owner controls the pause flag and the factory role; the factory is the
/// only address allowed to add or remove members.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct RegistryConfig {
    /// Owner that controls pausing and the factory role
    pub owner: Pubkey,
    /// Pending owner for two-step transfer.
    /// Set by `transfer_ownership`, must call `accept_ownership` to complete.
    pub pending_owner: Pubkey,
    /// Metrics factory allowed to add and remove members
    pub factory: Pubkey,
    /// Number of current members
    pub total_issued: u64,
    /// Whether the registry is paused (0 = active, 1 = paused)
    pub is_paused: u8,
    /// Padding for alignment
    pub _padding: [u8; 7],
}

impl RegistryConfig {
    /// Returns true if the registry is paused
    #[inline]
    pub fn paused(&self) -> bool {
        self.is_paused != 0
    }

    /// Check registry is not paused, returning error if it is.
    #[inline]
    pub fn require_not_paused(&self) -> Result<(), RegistryError> {
        if self.paused() {
            return Err(RegistryError::Paused);
        }
        Ok(())
    }

    /// Check caller is the metrics factory.
    #[inline]
    pub fn require_factory(&self, caller: &Pubkey) -> Result<(), RegistryError> {
        if self.factory != *caller {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }

    /// Check caller is the owner.
    #[inline]
    pub fn require_owner(&self, caller: &Pubkey) -> Result<(), RegistryError> {
        if self.owner != *caller {
            return Err(RegistryError::OwnerOnly);
        }
        Ok(())
    }
}

impl HasAuthority for RegistryConfig {
    fn authority(&self) -> &Pubkey {
        &self.owner
    }
    fn authority_mut(&mut self) -> &mut Pubkey {
        &mut self.owner
    }
    fn pending_authority(&self) -> &Pubkey {
        &self.pending_owner
    }
    fn pending_authority_mut(&mut self) -> &mut Pubkey {
        &mut self.pending_owner
    }
}
