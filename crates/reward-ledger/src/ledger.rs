//! Reward ledger store and allocation.
//!
//! [`RewardLedger`] owns every pool and holder record. Settlement, withdrawal
//! and the balance change hook are implemented on it in their own modules.

use alloc::collections::BTreeMap;
use pinocchio_log::log;
use reward_interface::{
    GroupMembership, Pubkey, Receipt,
    authority::{accept_authority_impl, require_authority, transfer_authority_impl},
};

use crate::{
    RewardError,
    events::{
        AuthorityTransferCompletedEvent, AuthorityTransferInitiatedEvent, MetricsBoundEvent,
        PoolRegisteredEvent, RewardEvent, RewardsAllocatedEvent,
    },
    state::{HolderAccount, LedgerConfig, PoolState},
};

/// Result type of state-mutating ledger operations.
pub type LedgerResult<T> = Result<Receipt<T, RewardEvent>, RewardError>;

/// The reward accounting store.
///
/// Pools are keyed by pool id, holder accounts by (pool id, holder). Every
/// operation computes on copies of the affected records and writes them back
/// only once all fallible steps have succeeded.
#[derive(Clone, Debug)]
pub struct RewardLedger {
    pub(crate) config: LedgerConfig,
    pub(crate) pools: BTreeMap<Pubkey, PoolState>,
    pub(crate) holders: BTreeMap<(Pubkey, Pubkey), HolderAccount>,
    pub(crate) metrics: BTreeMap<Pubkey, Pubkey>,
}

impl RewardLedger {
    /// Empty ledger controlled by `authority`.
    pub fn new(authority: Pubkey) -> Self {
        Self {
            config: LedgerConfig {
                authority,
                ..LedgerConfig::default()
            },
            pools: BTreeMap::new(),
            holders: BTreeMap::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Pool record, if registered.
    pub fn pool(&self, pool: &Pubkey) -> Option<&PoolState> {
        self.pools.get(pool)
    }

    /// Holder record, if one has been created.
    pub fn holder(&self, pool: &Pubkey, holder: &Pubkey) -> Option<&HolderAccount> {
        self.holders.get(&(*pool, *holder))
    }

    /// All holder records of `pool`.
    pub fn holders_of<'a>(&'a self, pool: &'a Pubkey) -> impl Iterator<Item = &'a HolderAccount> {
        self.holders
            .range((*pool, Pubkey::default())..=(*pool, [u8::MAX; 32]))
            .map(|(_, account)| account)
    }

    /// Pool a metrics address allocates into, if bound.
    pub fn metrics_pool(&self, metrics: &Pubkey) -> Option<&Pubkey> {
        self.metrics.get(metrics)
    }

    pub(crate) fn load_pool(&self, pool: &Pubkey) -> Result<PoolState, RewardError> {
        self.pools.get(pool).copied().ok_or(RewardError::UnknownPool)
    }

    /// Copy of a holder record, or a fresh one settled at the pool index.
    pub(crate) fn load_holder(&self, pool: &PoolState, holder: &Pubkey) -> HolderAccount {
        self.holders
            .get(&(pool.pool, *holder))
            .copied()
            .unwrap_or_else(|| HolderAccount::new(pool.pool, *holder, pool.cumulative_index))
    }

    pub(crate) fn store_holder(&mut self, account: HolderAccount) {
        self.holders.insert((account.pool, account.holder), account);
    }

    /// Register a pool whose whole supply is held by `initial_holder`.
    ///
    /// Only the ledger authority (the pool factory) may register pools.
    pub fn register_pool(
        &mut self,
        caller: &Pubkey,
        pool: &Pubkey,
        token_ledger: &Pubkey,
        initial_holder: &Pubkey,
        total_share_supply: u64,
    ) -> LedgerResult<()> {
        require_authority(&self.config, caller)?;

        if self.pools.contains_key(pool) {
            log!("register_pool: already registered");
            return Err(RewardError::PoolAlreadyRegistered);
        }

        let pool_count = self
            .config
            .pool_count
            .checked_add(1)
            .ok_or(RewardError::ArithmeticOverflow)?;

        let state = PoolState::new(*pool, *token_ledger, total_share_supply);
        let mut account = HolderAccount::new(*pool, *initial_holder, state.cumulative_index);
        account.balance = total_share_supply;

        self.pools.insert(*pool, state);
        self.store_holder(account);
        self.config.pool_count = pool_count;

        log!("register_pool: supply {}", total_share_supply);
        Ok(Receipt::new(
            (),
            RewardEvent::PoolRegistered(PoolRegisteredEvent {
                pool: *pool,
                token_ledger: *token_ledger,
                initial_holder: *initial_holder,
                total_share_supply,
                _padding: 0,
            }),
        ))
    }

    /// Bind `metrics` to `pool`, allowing it to allocate there while it
    /// remains a registry member. A metrics address serves exactly one pool.
    pub fn bind_metrics(
        &mut self,
        caller: &Pubkey,
        metrics: &Pubkey,
        pool: &Pubkey,
    ) -> LedgerResult<()> {
        require_authority(&self.config, caller)?;
        self.load_pool(pool)?;

        if self.metrics.contains_key(metrics) {
            log!("bind_metrics: already bound");
            return Err(RewardError::MetricsAlreadyBound);
        }

        self.metrics.insert(*metrics, *pool);

        Ok(Receipt::new(
            (),
            RewardEvent::MetricsBound(MetricsBoundEvent {
                pool: *pool,
                metrics: *metrics,
            }),
        ))
    }

    /// Allocate `amount` of reward to the holders of `pool`.
    ///
    /// The caller must be a registry member bound to `pool`. The amount is
    /// split over the current share supply by advancing the pool index; the
    /// truncated remainder stays in the pool.
    ///
    /// Authorization is checked before the pool is loaded, so callers that
    /// may not allocate get `Unauthorized` whether or not the pool exists.
    pub fn allocate<R: GroupMembership>(
        &mut self,
        registry: &R,
        caller: &Pubkey,
        pool: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        if !registry.is_group(caller) || self.metrics.get(caller) != Some(pool) {
            log!("allocate: unauthorized");
            return Err(RewardError::Unauthorized);
        }

        let mut state = self.load_pool(pool)?;

        if amount == 0 {
            return Err(RewardError::InvalidAmount);
        }

        state.apply_allocation(amount).inspect_err(|_| {
            log!("allocate: rejected");
        })?;
        self.pools.insert(*pool, state);

        log!("allocate: {} over {} shares", amount, state.total_share_supply);
        Ok(Receipt::new(
            (),
            RewardEvent::RewardsAllocated(RewardsAllocatedEvent {
                pool: *pool,
                metrics: *caller,
                new_index: state.cumulative_index,
                total_rewards_allocated: state.total_rewards_allocated,
                amount,
                total_share_supply: state.total_share_supply,
            }),
        ))
    }

    /// Total rewards ever allocated to `pool`, dust included.
    pub fn get_rewards_amount(&self, pool: &Pubkey) -> Result<u128, RewardError> {
        Ok(self.load_pool(pool)?.total_rewards_allocated)
    }

    /// Initiate two-step transfer of the ledger authority.
    pub fn transfer_authority(&mut self, caller: &Pubkey, new_authority: &Pubkey) -> LedgerResult<()> {
        transfer_authority_impl(&mut self.config, caller, new_authority)?;

        Ok(Receipt::new(
            (),
            RewardEvent::AuthorityTransferInitiated(AuthorityTransferInitiatedEvent {
                authority: *caller,
                pending_authority: *new_authority,
            }),
        ))
    }

    /// Complete a pending authority transfer.
    pub fn accept_authority(&mut self, caller: &Pubkey) -> LedgerResult<()> {
        let previous_authority = self.config.authority;
        accept_authority_impl(&mut self.config, caller)?;

        Ok(Receipt::new(
            (),
            RewardEvent::AuthorityTransferCompleted(AuthorityTransferCompletedEvent {
                previous_authority,
                new_authority: *caller,
            }),
        ))
    }
}
