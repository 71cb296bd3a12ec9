//! Seams to the external collaborators of the reward ledger.
//!
//! The ledger calls these the way a program invokes another program: the
//! callee either succeeds or returns a [`ProgramError`], and the ledger
//! commits its own state only after every call succeeded.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

/// Membership view of the metrics registry.
///
/// The ledger only asks whether an address is a member; it never mutates the
/// registry or reimplements its access control.
pub trait GroupMembership {
    /// Returns true if `address` is a currently registered member.
    fn is_group(&self, address: &Pubkey) -> bool;
}

/// The external share-token ledger that owns the authoritative balances.
///
/// # Flow
/// ```text
/// ledger.before_balance_change (settle from and to, move snapshots)
/// ShareLedger::move_shares     (external balance mutation)
/// commit settled accounts + moved snapshots
/// ```
pub trait ShareLedger {
    /// Address of this ledger, checked against the pool's registered token ledger.
    fn address(&self) -> Pubkey;

    /// Move `amount` shares of `pool` from `from` to `to`.
    ///
    /// Called strictly after both parties were settled. An error aborts the
    /// whole transfer, including the settlement.
    fn move_shares(
        &mut self,
        pool: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), ProgramError>;
}

/// The reward token minter that pays out withdrawals.
pub trait RewardMint {
    /// Mint `amount` reward tokens to `recipient`.
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<(), ProgramError>;
}
