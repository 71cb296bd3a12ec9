//! Reward withdrawal.

use pinocchio_log::log;
use reward_interface::{Pubkey, Receipt, RewardMint};

use crate::{
    LedgerResult, RewardError, RewardLedger,
    events::{RewardEvent, RewardsWithdrawnEvent},
};

impl RewardLedger {
    /// Amount `holder` could withdraw from `pool` right now.
    ///
    /// Pure query: `accrued + balance × (index − last_settled_index) / 1e18`.
    /// Holders without an account are owed nothing.
    pub fn calculate_withdrawable_amount(
        &self,
        pool: &Pubkey,
        holder: &Pubkey,
    ) -> Result<u64, RewardError> {
        let state = self.load_pool(pool)?;
        match self.holder(pool, holder) {
            Some(account) => account.withdrawable(state.cumulative_index),
            None => Ok(0),
        }
    }

    /// Pay `holder` everything it is owed in `pool`.
    ///
    /// 1. Settles the holder (on a copy)
    /// 2. Fails `ZeroWithdrawal` if nothing is owed, without touching state
    /// 3. Mints the amount to the holder
    /// 4. Commits `accrued = 0` and the lifetime statistics
    ///
    /// If the mint fails the holder keeps its full entitlement.
    pub fn withdraw<M: RewardMint>(
        &mut self,
        mint: &mut M,
        pool: &Pubkey,
        holder: &Pubkey,
    ) -> LedgerResult<u64> {
        let mut state = self.load_pool(pool)?;
        let mut account = self.settled_account(&state, holder)?;

        if account.accrued == 0 {
            log!("withdraw: zero amount");
            return Err(RewardError::ZeroWithdrawal);
        }

        let amount = account.take_accrued()?;
        state.record_withdrawal(amount)?;

        mint.mint(holder, amount).map_err(|_| {
            log!("withdraw: payout failed");
            RewardError::PayoutFailed
        })?;

        self.pools.insert(*pool, state);
        self.store_holder(account);

        log!("withdraw: paid {}", amount);
        Ok(Receipt::new(
            amount,
            RewardEvent::RewardsWithdrawn(RewardsWithdrawnEvent {
                pool: *pool,
                holder: *holder,
                amount,
                total_withdrawn: account.total_withdrawn,
            }),
        ))
    }
}
