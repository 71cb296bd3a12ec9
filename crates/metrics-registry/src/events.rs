//! Event definitions for the metrics registry.

use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use reward_interface::{EventBytes, Pubkey};

/// Event type discriminators for identifying registry events.
///
/// # Ranges
/// - **32-47**: Membership events
/// - **48-63**: Admin events
#[repr(u64)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, strum::IntoStaticStr,
)]
pub enum EventType {
    /// Member added
    GroupAdded = 32,
    /// Member removed
    GroupRemoved = 33,
    // Reserved: 34-47
    /// Pause flag toggled
    PauseChanged = 48,
    /// Factory role rotated
    FactoryChanged = 49,
    /// Ownership transfer initiated
    OwnershipTransferInitiated = 50,
    /// Ownership transfer completed
    OwnershipTransferCompleted = 51,
}

/// Event emitted when a metrics address is added.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct GroupAddedEvent {
    /// Member address
    pub group: Pubkey,
    /// Member count after the change
    pub total_issued: u64,
}

impl EventBytes for GroupAddedEvent {
    const DISCRIMINATOR: u64 = EventType::GroupAdded as u64;
}

/// Event emitted when a metrics address is removed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct GroupRemovedEvent {
    /// Former member address
    pub group: Pubkey,
    /// Member count after the change
    pub total_issued: u64,
}

impl EventBytes for GroupRemovedEvent {
    const DISCRIMINATOR: u64 = EventType::GroupRemoved as u64;
}

/// Event emitted when the pause flag changes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PauseChangedEvent {
    /// Owner that toggled the flag
    pub owner: Pubkey,
    /// New paused state (1 = paused, 0 = active)
    pub is_paused: u8,
    /// Padding for alignment
    pub _padding: [u8; 7],
}

impl EventBytes for PauseChangedEvent {
    const DISCRIMINATOR: u64 = EventType::PauseChanged as u64;
}

/// Event emitted when the factory role is rotated.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct FactoryChangedEvent {
    /// Factory before the change
    pub previous_factory: Pubkey,
    /// Factory after the change
    pub new_factory: Pubkey,
}

impl EventBytes for FactoryChangedEvent {
    const DISCRIMINATOR: u64 = EventType::FactoryChanged as u64;
}

/// Event emitted when an ownership transfer is initiated.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct OwnershipTransferInitiatedEvent {
    /// Current owner
    pub owner: Pubkey,
    /// Owner that must accept
    pub pending_owner: Pubkey,
}

impl EventBytes for OwnershipTransferInitiatedEvent {
    const DISCRIMINATOR: u64 = EventType::OwnershipTransferInitiated as u64;
}

/// Event emitted when an ownership transfer is accepted.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct OwnershipTransferCompletedEvent {
    /// Owner before the transfer
    pub previous_owner: Pubkey,
    /// Owner after the transfer
    pub new_owner: Pubkey,
}

impl EventBytes for OwnershipTransferCompletedEvent {
    const DISCRIMINATOR: u64 = EventType::OwnershipTransferCompleted as u64;
}

/// Any event emitted by the metrics registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    /// See [`GroupAddedEvent`]
    GroupAdded(GroupAddedEvent),
    /// See [`GroupRemovedEvent`]
    GroupRemoved(GroupRemovedEvent),
    /// See [`PauseChangedEvent`]
    PauseChanged(PauseChangedEvent),
    /// See [`FactoryChangedEvent`]
    FactoryChanged(FactoryChangedEvent),
    /// See [`OwnershipTransferInitiatedEvent`]
    OwnershipTransferInitiated(OwnershipTransferInitiatedEvent),
    /// See [`OwnershipTransferCompletedEvent`]
    OwnershipTransferCompleted(OwnershipTransferCompletedEvent),
}

impl RegistryEvent {
    /// Discriminator of the wrapped event.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::GroupAdded(_) => EventType::GroupAdded,
            Self::GroupRemoved(_) => EventType::GroupRemoved,
            Self::PauseChanged(_) => EventType::PauseChanged,
            Self::FactoryChanged(_) => EventType::FactoryChanged,
            Self::OwnershipTransferInitiated(_) => EventType::OwnershipTransferInitiated,
            Self::OwnershipTransferCompleted(_) => EventType::OwnershipTransferCompleted,
        }
    }

    /// Serialize the wrapped event with its discriminator prefix.
    pub fn to_event_bytes(&self) -> Vec<u8> {
        match self {
            Self::GroupAdded(e) => e.to_event_bytes(),
            Self::GroupRemoved(e) => e.to_event_bytes(),
            Self::PauseChanged(e) => e.to_event_bytes(),
            Self::FactoryChanged(e) => e.to_event_bytes(),
            Self::OwnershipTransferInitiated(e) => e.to_event_bytes(),
            Self::OwnershipTransferCompleted(e) => e.to_event_bytes(),
        }
    }
}
