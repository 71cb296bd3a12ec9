//! Reward Interface
//!
//! Shared types for communication between the reward ledger and the
//! collaborators it trusts but does not own.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐      is_group      ┌─────────────────────────┐
//! │     metrics-registry    │ ◄───────────────── │      reward-ledger      │
//! │  • metrics membership   │                    │  • cumulative index     │
//! │  • factory / owner      │                    │  • holder settlement    │
//! │  • pause flag           │                    │  • withdrawals          │
//! └─────────────────────────┘                    └─────────────────────────┘
//!                                                   │ move_shares   │ mint
//!                                                   ▼               ▼
//!                                         share-token ledger   reward token
//! ```
//!
//! The ledger never reimplements the registry's access control; it only asks
//! whether a caller is a member. Share balances and reward payouts are owned by
//! external ledgers reached through the [`ShareLedger`] and [`RewardMint`]
//! seams.
//!
//! # Modules
//!
//! - [`math`]: Fixed-point reward-per-share arithmetic
//! - [`authority`]: Two-step authority transfer helpers
//! - `collaborators`: Traits for the external registry and token ledgers
//! - `receipt`: Operation results carrying their emitted events

#![no_std]

extern crate alloc;

pub mod authority;
mod collaborators;
pub mod math;
mod receipt;

pub use collaborators::*;
pub use math::ACCUMULATOR_PRECISION;
pub use pinocchio::pubkey::Pubkey;
pub use receipt::*;
