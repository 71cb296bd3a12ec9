//! Reward Ledger
//!
//! Apportions reward allocations among the share holders of a pool, in
//! proportion to their holdings, while holdings change between allocations.
//!
//! # Architecture
//!
//! ```text
//! metrics ──allocate──► RewardLedger ──► PoolState.cumulative_index += amount × 1e18 / supply
//!
//! share ledger ──transfer_shares──► before_balance_change ──► settle(from), settle(to)
//!                                   ShareLedger::move_shares
//!                                   commit snapshots
//!
//! holder ──withdraw──► settle(holder) ──► RewardMint::mint(accrued) ──► accrued = 0
//! ```
//!
//! Every operation is O(1) in the number of holders: an allocation only
//! advances the pool index, and each holder catches up lazily when settled.
//!
//! # Operations
//!
//! - `register_pool` / `bind_metrics`: Pool factory setup
//! - `allocate`: Advance a pool's cumulative index
//! - `settle`: Fold unsettled reward into a holder's accrued amount
//! - `before_balance_change` / `transfer_shares`: Settle before balances move
//! - `calculate_withdrawable_amount` / `withdraw`: Query and pay out rewards

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
mod hook;
mod ledger;
mod settlement;
pub mod state;
mod withdrawal;

pub use errors::RewardError;
pub use events::{
    AuthorityTransferCompletedEvent, AuthorityTransferInitiatedEvent, EventType,
    MetricsBoundEvent, PoolRegisteredEvent, RewardEvent, RewardsAllocatedEvent,
    RewardsWithdrawnEvent, SharesTransferredEvent,
};
pub use ledger::{LedgerResult, RewardLedger};
pub use state::{HolderAccount, LedgerConfig, PoolState};
