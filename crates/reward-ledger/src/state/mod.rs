//! Reward ledger state records.
//!
//! All records are fixed-layout `Pod` structs, keyed in the ledger by id:
//! pool id → [`PoolState`], (pool id, holder) → [`HolderAccount`].

mod config;
mod holder;
mod pool;

pub use config::LedgerConfig;
pub use holder::HolderAccount;
pub use pool::PoolState;
