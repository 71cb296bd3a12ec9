//! Holder settlement.
//!
//! Settling a holder folds the reward earned since its last settlement into
//! `accrued`, weighted by the balance held during that interval, and moves
//! `last_settled_index` up to the pool index. It must run before every
//! balance change and before every withdrawal.

use reward_interface::Pubkey;

use crate::{
    RewardError, RewardLedger,
    state::{HolderAccount, PoolState},
};

impl RewardLedger {
    /// Settled copy of `holder`'s account. Nothing is written.
    ///
    /// Missing accounts come back fresh: zero balance, nothing accrued,
    /// settled at the current index.
    pub(crate) fn settled_account(
        &self,
        pool: &PoolState,
        holder: &Pubkey,
    ) -> Result<HolderAccount, RewardError> {
        let mut account = self.load_holder(pool, holder);
        account.settle(pool.cumulative_index)?;
        Ok(account)
    }

    /// Settle `holder` against the current index of `pool`.
    ///
    /// Idempotent: a second call with no allocation or balance change in
    /// between leaves the account unchanged. Settlement never changes what a
    /// holder can withdraw, only where the amount is recorded.
    pub fn settle(&mut self, pool: &Pubkey, holder: &Pubkey) -> Result<(), RewardError> {
        let state = self.load_pool(pool)?;
        let account = self.settled_account(&state, holder)?;
        self.store_holder(account);
        Ok(())
    }
}
