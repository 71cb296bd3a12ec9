//! Per-holder reward state.

use bytemuck::{Pod, Zeroable};
use reward_interface::{Pubkey, math::earned_between};

use crate::RewardError;

/// Reward state for one holder of one pool.
///
/// `balance` is a snapshot of the external share ledger's balance, used only
/// to weight index movement. Between settlements the holder is owed
///
/// ```text
/// withdrawable = accrued + balance × (cumulative_index − last_settled_index) / 1e18
/// ```
///
/// Settling folds the second term into `accrued` and moves
/// `last_settled_index` up to the pool index. It must run before every
/// balance change so each interval is weighted by the balance held during it.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct HolderAccount {
    /// Pool this account belongs to
    pub pool: Pubkey,
    /// Holder address
    pub holder: Pubkey,
    /// Pool index at the last settlement (never above the pool index)
    pub last_settled_index: u128,
    /// Share balance snapshot
    pub balance: u64,
    /// Reward earned and not yet withdrawn
    pub accrued: u64,
    /// Total rewards withdrawn by this holder
    pub total_withdrawn: u64,
    /// Padding for 16-byte alignment
    pub _padding: u64,
}

impl HolderAccount {
    /// Record size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Fresh account with nothing owed, settled at `current_index`.
    pub fn new(pool: Pubkey, holder: Pubkey, current_index: u128) -> Self {
        Self {
            pool,
            holder,
            last_settled_index: current_index,
            ..Self::zeroed()
        }
    }

    /// Reward earned since the last settlement at `current_index`.
    #[inline]
    pub fn unsettled(&self, current_index: u128) -> Result<u64, RewardError> {
        earned_between(current_index, self.last_settled_index, self.balance)
            .ok_or(RewardError::ArithmeticOverflow)
    }

    /// Total amount the holder could withdraw at `current_index`.
    #[inline]
    pub fn withdrawable(&self, current_index: u128) -> Result<u64, RewardError> {
        self.accrued
            .checked_add(self.unsettled(current_index)?)
            .ok_or(RewardError::ArithmeticOverflow)
    }

    /// Fold unsettled reward into `accrued` and catch up to `current_index`.
    ///
    /// A second call at the same index is a no-op.
    pub fn settle(&mut self, current_index: u128) -> Result<(), RewardError> {
        let accrued = self.withdrawable(current_index)?;
        self.accrued = accrued;
        self.last_settled_index = current_index;
        Ok(())
    }

    /// Take the whole accrued amount, leaving zero behind.
    pub fn take_accrued(&mut self) -> Result<u64, RewardError> {
        let amount = self.accrued;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(RewardError::ArithmeticOverflow)?;
        self.accrued = 0;
        Ok(amount)
    }
}
