//! Metrics Registry
//!
//! Tracks which metrics addresses may allocate rewards. The reward ledger
//! consumes it only through [`GroupMembership`](reward_interface::GroupMembership).
//!
//! # Roles
//!
//! - **Owner**: toggles the pause flag, rotates the factory role
//! - **Factory**: adds and removes members while unpaused

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
mod registry;
pub mod state;

pub use errors::RegistryError;
pub use events::{
    EventType, FactoryChangedEvent, GroupAddedEvent, GroupRemovedEvent,
    OwnershipTransferCompletedEvent, OwnershipTransferInitiatedEvent, PauseChangedEvent,
    RegistryEvent,
};
pub use registry::{MetricsRegistry, RegistryResult};
pub use state::RegistryConfig;
