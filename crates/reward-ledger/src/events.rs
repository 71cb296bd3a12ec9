//! Event definitions for the reward ledger.
//!
//! Events are returned to the caller in a [`Receipt`](reward_interface::Receipt)
//! alongside the operation result, in emission order.
//!
//! # Event Types
//!
//! - [`PoolRegisteredEvent`] - Emitted when a pool is registered
//! - [`MetricsBoundEvent`] - Emitted when a metrics address is bound to a pool
//! - [`RewardsAllocatedEvent`] - Emitted when rewards are allocated to a pool
//! - [`SharesTransferredEvent`] - Emitted when shares move between holders
//! - [`RewardsWithdrawnEvent`] - Emitted when a holder withdraws rewards
//!
//! Every event is a `Pod` struct and serializes to
//! `[discriminator (8 bytes)][struct bytes]` via [`EventBytes`].

use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use reward_interface::{EventBytes, Pubkey};

/// Event type discriminators for identifying event types.
///
/// # Ranges
/// - **1-15**: Core events (allocation, transfer, withdrawal)
/// - **16-31**: Admin events (registration, binding, authority)
#[repr(u64)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, strum::IntoStaticStr,
)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15)
    // =========================================================================
    /// Rewards allocated event
    RewardsAllocated = 1,
    /// Shares transferred event
    SharesTransferred = 2,
    /// Rewards withdrawn event
    RewardsWithdrawn = 3,
    // Reserved: 4-15

    // =========================================================================
    // Admin Events (16-31)
    // =========================================================================
    /// Pool registered event
    PoolRegistered = 16,
    /// Metrics bound event
    MetricsBound = 17,
    /// Authority transfer initiated event
    AuthorityTransferInitiated = 18,
    /// Authority transfer completed event
    AuthorityTransferCompleted = 19,
}

macro_rules! event_type {
    ($event:ty, $kind:ident) => {
        impl EventBytes for $event {
            const DISCRIMINATOR: u64 = EventType::$kind as u64;
        }
    };
}

/// Event emitted when rewards are allocated (index advanced).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct RewardsAllocatedEvent {
    /// Pool id
    pub pool: Pubkey,
    /// Metrics address that allocated
    pub metrics: Pubkey,
    /// Cumulative index after the allocation
    pub new_index: u128,
    /// Lifetime rewards allocated after the allocation
    pub total_rewards_allocated: u128,
    /// Amount allocated
    pub amount: u64,
    /// Share supply the amount was split over
    pub total_share_supply: u64,
}
event_type!(RewardsAllocatedEvent, RewardsAllocated);

/// Event emitted when shares move between two holders.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SharesTransferredEvent {
    /// Pool id
    pub pool: Pubkey,
    /// Sender
    pub from: Pubkey,
    /// Recipient
    pub to: Pubkey,
    /// Shares moved
    pub amount: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}
event_type!(SharesTransferredEvent, SharesTransferred);

/// Event emitted when a holder withdraws rewards.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct RewardsWithdrawnEvent {
    /// Pool id
    pub pool: Pubkey,
    /// Holder that received the payout
    pub holder: Pubkey,
    /// Amount paid
    pub amount: u64,
    /// Holder's lifetime withdrawals after this payout
    pub total_withdrawn: u64,
}
event_type!(RewardsWithdrawnEvent, RewardsWithdrawn);

/// Event emitted when a pool is registered.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PoolRegisteredEvent {
    /// Pool id
    pub pool: Pubkey,
    /// Share-token ledger allowed to invoke the balance change hook
    pub token_ledger: Pubkey,
    /// Holder that received the initial supply
    pub initial_holder: Pubkey,
    /// Initial share supply
    pub total_share_supply: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}
event_type!(PoolRegisteredEvent, PoolRegistered);

/// Event emitted when a metrics address is bound to a pool.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct MetricsBoundEvent {
    /// Pool id
    pub pool: Pubkey,
    /// Metrics address allowed to allocate into the pool
    pub metrics: Pubkey,
}
event_type!(MetricsBoundEvent, MetricsBound);

/// Event emitted when an authority transfer is initiated.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityTransferInitiatedEvent {
    /// Current authority
    pub authority: Pubkey,
    /// Authority that must accept
    pub pending_authority: Pubkey,
}
event_type!(AuthorityTransferInitiatedEvent, AuthorityTransferInitiated);

/// Event emitted when an authority transfer is accepted.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityTransferCompletedEvent {
    /// Authority before the transfer
    pub previous_authority: Pubkey,
    /// Authority after the transfer
    pub new_authority: Pubkey,
}
event_type!(AuthorityTransferCompletedEvent, AuthorityTransferCompleted);

/// Any event emitted by the reward ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardEvent {
    /// See [`RewardsAllocatedEvent`]
    RewardsAllocated(RewardsAllocatedEvent),
    /// See [`SharesTransferredEvent`]
    SharesTransferred(SharesTransferredEvent),
    /// See [`RewardsWithdrawnEvent`]
    RewardsWithdrawn(RewardsWithdrawnEvent),
    /// See [`PoolRegisteredEvent`]
    PoolRegistered(PoolRegisteredEvent),
    /// See [`MetricsBoundEvent`]
    MetricsBound(MetricsBoundEvent),
    /// See [`AuthorityTransferInitiatedEvent`]
    AuthorityTransferInitiated(AuthorityTransferInitiatedEvent),
    /// See [`AuthorityTransferCompletedEvent`]
    AuthorityTransferCompleted(AuthorityTransferCompletedEvent),
}

impl RewardEvent {
    /// Discriminator of the wrapped event.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::RewardsAllocated(_) => EventType::RewardsAllocated,
            Self::SharesTransferred(_) => EventType::SharesTransferred,
            Self::RewardsWithdrawn(_) => EventType::RewardsWithdrawn,
            Self::PoolRegistered(_) => EventType::PoolRegistered,
            Self::MetricsBound(_) => EventType::MetricsBound,
            Self::AuthorityTransferInitiated(_) => EventType::AuthorityTransferInitiated,
            Self::AuthorityTransferCompleted(_) => EventType::AuthorityTransferCompleted,
        }
    }

    /// Serialize the wrapped event with its discriminator prefix.
    pub fn to_event_bytes(&self) -> Vec<u8> {
        match self {
            Self::RewardsAllocated(e) => e.to_event_bytes(),
            Self::SharesTransferred(e) => e.to_event_bytes(),
            Self::RewardsWithdrawn(e) => e.to_event_bytes(),
            Self::PoolRegistered(e) => e.to_event_bytes(),
            Self::MetricsBound(e) => e.to_event_bytes(),
            Self::AuthorityTransferInitiated(e) => e.to_event_bytes(),
            Self::AuthorityTransferCompleted(e) => e.to_event_bytes(),
        }
    }
}
