//! Protocol setup helpers for reward-ledger tests.

use metrics_registry::MetricsRegistry;
use reward_ledger::{LedgerResult, RewardError, RewardLedger};
use reward_interface::Pubkey;

use super::mock_accounts::{MockRewardMint, MockShareLedger};

pub const OWNER: Pubkey = [1u8; 32];
pub const FACTORY: Pubkey = [2u8; 32];
pub const METRICS_FACTORY: Pubkey = [3u8; 32];
pub const TOKEN_LEDGER: Pubkey = [4u8; 32];
pub const POOL: Pubkey = [5u8; 32];
pub const METRICS: Pubkey = [6u8; 32];
pub const ALICE: Pubkey = [10u8; 32];
pub const BOB: Pubkey = [11u8; 32];
pub const CAROL: Pubkey = [12u8; 32];

/// A reward ledger wired to a registry, a share ledger and a reward mint.
///
/// One pool is registered with the whole supply held by `ALICE`, and
/// `METRICS` is a registry member bound to it.
pub struct Protocol {
    pub ledger: RewardLedger,
    pub registry: MetricsRegistry,
    pub shares: MockShareLedger,
    pub mint: MockRewardMint,
}

impl Protocol {
    pub fn new(total_share_supply: u64) -> Self {
        let mut ledger = RewardLedger::new(FACTORY);
        let mut registry = MetricsRegistry::new(OWNER, METRICS_FACTORY);
        let mut shares = MockShareLedger::new(TOKEN_LEDGER);

        ledger
            .register_pool(&FACTORY, &POOL, &TOKEN_LEDGER, &ALICE, total_share_supply)
            .expect("register_pool should succeed");
        shares.issue(&POOL, &ALICE, total_share_supply);

        registry
            .add_group(&METRICS_FACTORY, &METRICS)
            .expect("add_group should succeed");
        ledger
            .bind_metrics(&FACTORY, &METRICS, &POOL)
            .expect("bind_metrics should succeed");

        Self {
            ledger,
            registry,
            shares,
            mint: MockRewardMint::default(),
        }
    }

    pub fn allocate(&mut self, amount: u64) -> LedgerResult<()> {
        self.ledger
            .allocate(&self.registry, &METRICS, &POOL, amount)
    }

    pub fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> LedgerResult<()> {
        self.ledger
            .transfer_shares(&mut self.shares, &POOL, from, to, amount)
    }

    pub fn withdraw(&mut self, holder: &Pubkey) -> LedgerResult<u64> {
        self.ledger.withdraw(&mut self.mint, &POOL, holder)
    }

    pub fn withdrawable(&self, holder: &Pubkey) -> u64 {
        self.ledger
            .calculate_withdrawable_amount(&POOL, holder)
            .expect("pool is registered")
    }

    pub fn rewards_amount(&self) -> u128 {
        self.ledger
            .get_rewards_amount(&POOL)
            .expect("pool is registered")
    }

    pub fn supply(&self) -> u64 {
        self.ledger
            .pool(&POOL)
            .expect("pool is registered")
            .total_share_supply
    }
}

/// Assert that an operation failed with `expected`, printing its reason.
pub fn assert_fails<T: std::fmt::Debug>(result: Result<T, RewardError>, expected: RewardError) {
    match result {
        Err(err) => assert_eq!(err, expected, "expected '{}', got '{}'", expected, err),
        Ok(value) => panic!("expected '{}', got Ok({:?})", expected, value),
    }
}
