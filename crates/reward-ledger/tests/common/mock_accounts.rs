//! Mock share ledger and reward mint for reward-ledger tests.

use std::collections::HashMap;

use pinocchio::program_error::ProgramError;
use reward_interface::{Pubkey, RewardMint, ShareLedger};

/// In-memory share-token ledger holding the authoritative balances.
///
/// Rejects moves that exceed the sender's balance, like a token transfer
/// would, and can be told to reject the next move regardless.
#[derive(Debug, Default)]
pub struct MockShareLedger {
    pub address: Pubkey,
    pub balances: HashMap<(Pubkey, Pubkey), u64>,
    pub reject_next: bool,
}

impl MockShareLedger {
    pub fn new(address: Pubkey) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Credit `holder` with freshly issued shares of `pool`.
    pub fn issue(&mut self, pool: &Pubkey, holder: &Pubkey, amount: u64) {
        *self.balances.entry((*pool, *holder)).or_default() += amount;
    }

    pub fn balance_of(&self, pool: &Pubkey, holder: &Pubkey) -> u64 {
        self.balances.get(&(*pool, *holder)).copied().unwrap_or(0)
    }
}

impl ShareLedger for MockShareLedger {
    fn address(&self) -> Pubkey {
        self.address
    }

    fn move_shares(
        &mut self,
        pool: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), ProgramError> {
        if std::mem::take(&mut self.reject_next) {
            return Err(ProgramError::Custom(1));
        }

        let from_balance = self.balance_of(pool, from);
        if from_balance < amount {
            return Err(ProgramError::InsufficientFunds);
        }

        self.balances.insert((*pool, *from), from_balance - amount);
        *self.balances.entry((*pool, *to)).or_default() += amount;
        Ok(())
    }
}

/// In-memory reward token that records every mint.
#[derive(Debug, Default)]
pub struct MockRewardMint {
    pub balances: HashMap<Pubkey, u64>,
    pub total_supply: u64,
    pub fail: bool,
}

impl MockRewardMint {
    pub fn balance_of(&self, holder: &Pubkey) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }
}

impl RewardMint for MockRewardMint {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<(), ProgramError> {
        if self.fail {
            return Err(ProgramError::Custom(2));
        }
        *self.balances.entry(*recipient).or_default() += amount;
        self.total_supply += amount;
        Ok(())
    }
}
