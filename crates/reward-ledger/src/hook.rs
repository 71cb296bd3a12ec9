//! Balance change hook.
//!
//! The share-token ledger must settle both parties of a transfer strictly
//! before it mutates their balances: the reward for the interval since the
//! last settlement belongs to the balance held *during* that interval. The
//! hook then moves `amount` between the two snapshots so they keep mirroring
//! the token ledger once it applies the same change.
//!
//! # Transfer Flow
//!
//! ```text
//! transfer_shares(ledger, pool, from, to, amount)
//!   1. caller == pool.token_ledger            (else Unauthorized)
//!   2. settle(from), settle(to)               (copies, pre-mutation balances)
//!   3. from.balance >= amount                 (else InsufficientShares)
//!   4. move amount between the snapshots      (copies)
//!   5. ShareLedger::move_shares               (else TransferRejected)
//!   6. commit settled accounts + moved snapshots
//! ```
//!
//! Steps 1-4 are exactly `before_balance_change`. Nothing is written before
//! step 6, so a rejected move also discards the settlement.

use pinocchio_log::log;
use reward_interface::{Pubkey, Receipt, ShareLedger};

use crate::{
    LedgerResult, RewardError, RewardLedger,
    events::{RewardEvent, SharesTransferredEvent},
    state::HolderAccount,
};

impl RewardLedger {
    /// Authorize the token ledger, settle both parties and move `amount`
    /// between their snapshots, all on copies.
    fn apply_balance_change(
        &self,
        caller: &Pubkey,
        pool: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(HolderAccount, HolderAccount), RewardError> {
        let state = self.load_pool(pool)?;
        state.require_token_ledger(caller).inspect_err(|_| {
            log!("before_balance_change: unauthorized");
        })?;

        let mut sender = self.settled_account(&state, from)?;
        let mut recipient = self.settled_account(&state, to)?;

        if sender.balance < amount {
            log!("before_balance_change: insufficient shares");
            return Err(RewardError::InsufficientShares);
        }

        if from != to {
            sender.balance -= amount;
            recipient.balance = recipient
                .balance
                .checked_add(amount)
                .ok_or(RewardError::ArithmeticOverflow)?;
        }

        Ok((sender, recipient))
    }

    /// Settle `from` and `to` and move `amount` between their snapshots,
    /// ahead of the token ledger applying the same change.
    ///
    /// Must be invoked by the pool's registered token ledger. Fails
    /// `InsufficientShares` if `from` holds fewer than `amount` shares.
    pub fn before_balance_change(
        &mut self,
        caller: &Pubkey,
        pool: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        let (sender, recipient) = self.apply_balance_change(caller, pool, from, to, amount)?;

        // Self-transfer: both copies are the same settled account
        self.store_holder(sender);
        self.store_holder(recipient);

        log!("before_balance_change: moved {}", amount);
        Ok(Receipt::silent(()))
    }

    /// Move `amount` shares of `pool` from `from` to `to` as one transaction.
    ///
    /// Runs the balance change hook on copies, asks `ledger` to move the
    /// authoritative balances, then commits. Any failure leaves every record
    /// exactly as it was.
    pub fn transfer_shares<L: ShareLedger>(
        &mut self,
        ledger: &mut L,
        pool: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        let caller = ledger.address();
        let (sender, recipient) = self.apply_balance_change(&caller, pool, from, to, amount)?;

        ledger.move_shares(pool, from, to, amount).map_err(|_| {
            log!("transfer_shares: rejected by share ledger");
            RewardError::TransferRejected
        })?;

        self.store_holder(sender);
        self.store_holder(recipient);

        Ok(Receipt::new(
            (),
            RewardEvent::SharesTransferred(SharesTransferredEvent {
                pool: *pool,
                from: *from,
                to: *to,
                amount,
                _padding: 0,
            }),
        ))
    }
}
