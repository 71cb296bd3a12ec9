//! Metrics membership store.

use alloc::collections::BTreeSet;
use pinocchio_log::log;
use reward_interface::{
    GroupMembership, Pubkey, Receipt,
    authority::{accept_authority_impl, transfer_authority_impl},
};

use crate::{
    RegistryError,
    events::{
        FactoryChangedEvent, GroupAddedEvent, GroupRemovedEvent, OwnershipTransferCompletedEvent,
        OwnershipTransferInitiatedEvent, PauseChangedEvent, RegistryEvent,
    },
    state::RegistryConfig,
};

/// Result type of state-mutating registry operations.
pub type RegistryResult<T> = Result<Receipt<T, RegistryEvent>, RegistryError>;

/// Set of metrics addresses allowed to allocate rewards.
///
/// Created empty and unpaused with a fixed owner. Membership changes require
/// the factory role and an unpaused registry; the pause check runs first, so
/// a paused registry reports `Paused` to every caller.
#[derive(Clone, Debug)]
pub struct MetricsRegistry {
    config: RegistryConfig,
    members: BTreeSet<Pubkey>,
}

impl MetricsRegistry {
    /// Empty, unpaused registry.
    pub fn new(owner: Pubkey, factory: Pubkey) -> Self {
        Self {
            config: RegistryConfig {
                owner,
                factory,
                ..RegistryConfig::default()
            },
            members: BTreeSet::new(),
        }
    }

    /// Registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns true if `address` is a current member.
    pub fn is_group(&self, address: &Pubkey) -> bool {
        self.members.contains(address)
    }

    /// Number of current members.
    pub fn total_issued_metrics(&self) -> u64 {
        self.config.total_issued
    }

    /// Returns true while membership changes are blocked.
    pub fn paused(&self) -> bool {
        self.config.paused()
    }

    /// Add `address` as a member. Factory only.
    pub fn add_group(&mut self, caller: &Pubkey, address: &Pubkey) -> RegistryResult<()> {
        self.config.require_not_paused()?;
        self.config.require_factory(caller)?;

        if self.members.contains(address) {
            log!("add_group: already enabled");
            return Err(RegistryError::AlreadyEnabled);
        }

        let total_issued = self
            .config
            .total_issued
            .checked_add(1)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        self.members.insert(*address);
        self.config.total_issued = total_issued;

        Ok(Receipt::new(
            (),
            RegistryEvent::GroupAdded(GroupAddedEvent {
                group: *address,
                total_issued,
            }),
        ))
    }

    /// Remove member `address`. Factory only.
    pub fn remove_group(&mut self, caller: &Pubkey, address: &Pubkey) -> RegistryResult<()> {
        self.config.require_not_paused()?;
        self.config.require_factory(caller)?;

        if !self.members.contains(address) {
            log!("remove_group: address is not group");
            return Err(RegistryError::NotAGroup);
        }

        let total_issued = self
            .config
            .total_issued
            .checked_sub(1)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        self.members.remove(address);
        self.config.total_issued = total_issued;

        Ok(Receipt::new(
            (),
            RegistryEvent::GroupRemoved(GroupRemovedEvent {
                group: *address,
                total_issued,
            }),
        ))
    }

    /// Block membership changes. Owner only.
    pub fn pause(&mut self, caller: &Pubkey) -> RegistryResult<()> {
        self.set_paused(caller, true)
    }

    /// Allow membership changes again. Owner only.
    pub fn unpause(&mut self, caller: &Pubkey) -> RegistryResult<()> {
        self.set_paused(caller, false)
    }

    fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> RegistryResult<()> {
        self.config.require_owner(caller).inspect_err(|_| {
            log!("set_paused: owner only");
        })?;

        self.config.is_paused = paused as u8;

        log!("set_paused: {}", self.config.is_paused);
        Ok(Receipt::new(
            (),
            RegistryEvent::PauseChanged(PauseChangedEvent {
                owner: *caller,
                is_paused: self.config.is_paused,
                _padding: [0u8; 7],
            }),
        ))
    }

    /// Rotate the factory role. Owner only.
    pub fn set_factory(&mut self, caller: &Pubkey, factory: &Pubkey) -> RegistryResult<()> {
        self.config.require_owner(caller)?;

        let previous_factory = self.config.factory;
        self.config.factory = *factory;

        Ok(Receipt::new(
            (),
            RegistryEvent::FactoryChanged(FactoryChangedEvent {
                previous_factory,
                new_factory: *factory,
            }),
        ))
    }

    /// Initiate two-step ownership transfer.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: &Pubkey) -> RegistryResult<()> {
        transfer_authority_impl(&mut self.config, caller, new_owner)?;

        Ok(Receipt::new(
            (),
            RegistryEvent::OwnershipTransferInitiated(OwnershipTransferInitiatedEvent {
                owner: *caller,
                pending_owner: *new_owner,
            }),
        ))
    }

    /// Complete a pending ownership transfer.
    pub fn accept_ownership(&mut self, caller: &Pubkey) -> RegistryResult<()> {
        let previous_owner = self.config.owner;
        accept_authority_impl(&mut self.config, caller)?;

        Ok(Receipt::new(
            (),
            RegistryEvent::OwnershipTransferCompleted(OwnershipTransferCompletedEvent {
                previous_owner,
                new_owner: *caller,
            }),
        ))
    }
}

impl GroupMembership for MetricsRegistry {
    fn is_group(&self, address: &Pubkey) -> bool {
        MetricsRegistry::is_group(self, address)
    }
}
