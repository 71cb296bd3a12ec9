//! Per-pool reward state.

use bytemuck::{Pod, Zeroable};
use reward_interface::{Pubkey, math::reward_per_share};

use crate::RewardError;

/// Reward state for a single pool.
///
/// # Reward Accumulator Design
///
/// `cumulative_index` is the total reward per share ever allocated to the
/// pool, scaled by `ACCUMULATOR_PRECISION` (1e18). A holder's entitlement is
/// derived from the index movement since that holder's last settlement, so an
/// allocation is O(1) regardless of the number of holders.
///
/// ## Allocation Flow
///
/// On `apply_allocation(amount)`:
/// 1. Require `total_share_supply > 0`
/// 2. `index_delta = amount × 1e18 / total_share_supply` (truncated)
/// 3. `cumulative_index += index_delta`
/// 4. `total_rewards_allocated += amount` (the full amount)
///
/// `total_rewards_allocated` is capped at `u64::MAX`. A holder never earns
/// more than the pool was given, so the cap keeps every holder's accrued and
/// withdrawable amounts within u64.
///
/// The truncated remainder is never distributed. It stays in the pool as
/// dust, so payouts can never exceed `total_rewards_allocated`.
///
/// ## Example
///
/// ```text
/// total_share_supply = 3
/// allocate 10:  index_delta = 10e18 / 3 = 3_333_333_333_333_333_333
/// each share earns floor(3.33…) = 3, 1 unit remains as dust
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct PoolState {
    /// Pool id (the share token address)
    pub pool: Pubkey,
    /// Share-token ledger allowed to invoke the balance change hook
    pub token_ledger: Pubkey,
    /// Cumulative rewards per share, scaled by 1e18.
    ///
    /// **Updates on:** `apply_allocation()` only. Never decreases.
    pub cumulative_index: u128,
    /// Total rewards ever allocated, including undistributed dust.
    ///
    /// **Updates on:** `apply_allocation()` only. Never decreases.
    pub total_rewards_allocated: u128,
    /// Total rewards paid out to holders over the pool's lifetime
    pub total_rewards_withdrawn: u128,
    /// Total shares outstanding; equals the sum of all holder snapshots
    pub total_share_supply: u64,
    /// Number of allocations applied
    pub allocation_count: u64,
}

impl PoolState {
    /// Record size
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// New pool with an empty index.
    pub fn new(pool: Pubkey, token_ledger: Pubkey, total_share_supply: u64) -> Self {
        Self {
            pool,
            token_ledger,
            total_share_supply,
            ..Self::zeroed()
        }
    }

    /// Check that `caller` is the registered share-token ledger.
    #[inline]
    pub fn require_token_ledger(&self, caller: &Pubkey) -> Result<(), RewardError> {
        if self.token_ledger != *caller {
            return Err(RewardError::Unauthorized);
        }
        Ok(())
    }

    /// Rewards allocated but not yet withdrawn (accrued, unsettled and dust).
    pub fn undistributed_rewards(&self) -> u128 {
        self.total_rewards_allocated
            .saturating_sub(self.total_rewards_withdrawn)
    }

    /// Advance the index by `amount` spread over the current supply.
    ///
    /// Returns `Err(NoSupply)` when there are no shares to split over, and
    /// `Err(ArithmeticOverflow)` when the lifetime total would exceed
    /// `u64::MAX`. On error the record is left untouched.
    pub fn apply_allocation(&mut self, amount: u64) -> Result<(), RewardError> {
        if self.total_share_supply == 0 {
            return Err(RewardError::NoSupply);
        }

        let index_delta = reward_per_share(amount, self.total_share_supply)
            .ok_or(RewardError::ArithmeticOverflow)?;

        let cumulative_index = self
            .cumulative_index
            .checked_add(index_delta)
            .ok_or(RewardError::ArithmeticOverflow)?;
        let total_rewards_allocated = self
            .total_rewards_allocated
            .checked_add(amount as u128)
            .filter(|total| *total <= u64::MAX as u128)
            .ok_or(RewardError::ArithmeticOverflow)?;
        let allocation_count = self
            .allocation_count
            .checked_add(1)
            .ok_or(RewardError::ArithmeticOverflow)?;

        self.cumulative_index = cumulative_index;
        self.total_rewards_allocated = total_rewards_allocated;
        self.allocation_count = allocation_count;

        Ok(())
    }

    /// Record a payout against the pool's lifetime statistics.
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<(), RewardError> {
        self.total_rewards_withdrawn = self
            .total_rewards_withdrawn
            .checked_add(amount as u128)
            .ok_or(RewardError::ArithmeticOverflow)?;
        Ok(())
    }
}
