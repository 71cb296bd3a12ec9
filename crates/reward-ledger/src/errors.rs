//! Reward ledger errors.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use pinocchio::program_error::ProgramError;
use reward_interface::authority::AuthorityError;

/// Reward ledger error codes.
///
/// Every error aborts the whole operation; no pool or holder record is
/// written before the last fallible step has succeeded.
#[repr(u32)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, strum::IntoStaticStr,
)]
pub enum RewardError {
    /// Caller lacks the required role (authority, allocator or token ledger)
    #[strum(serialize = "illegal access")]
    Unauthorized = 0,
    /// Allocation against a pool with zero total shares
    #[strum(serialize = "no share supply")]
    NoSupply = 1,
    /// Nothing to pay out
    #[strum(serialize = "withdraw value is 0")]
    ZeroWithdrawal = 2,
    /// Invalid amount (zero)
    #[strum(serialize = "invalid amount")]
    InvalidAmount = 3,
    /// Pool is not registered
    #[strum(serialize = "unknown pool")]
    UnknownPool = 4,
    /// Pool id is already registered
    #[strum(serialize = "pool already registered")]
    PoolAlreadyRegistered = 5,
    /// Metrics address is already bound to a pool
    #[strum(serialize = "metrics already bound")]
    MetricsAlreadyBound = 6,
    /// Sender's share snapshot is below the transfer amount
    #[strum(serialize = "insufficient shares")]
    InsufficientShares = 7,
    /// External share ledger rejected the balance move
    #[strum(serialize = "transfer rejected")]
    TransferRejected = 8,
    /// Reward mint rejected the payout
    #[strum(serialize = "payout failed")]
    PayoutFailed = 9,
    /// Arithmetic overflow
    #[strum(serialize = "arithmetic overflow")]
    ArithmeticOverflow = 10,
    /// Authority transfer was never initiated
    #[strum(serialize = "no pending authority")]
    NoPendingAuthority = 11,
}

impl RewardError {
    /// Human-readable failure reason.
    pub fn reason(self) -> &'static str {
        self.into()
    }
}

impl core::fmt::Display for RewardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}

impl From<RewardError> for ProgramError {
    fn from(e: RewardError) -> Self {
        ProgramError::Custom(e.into())
    }
}

impl From<AuthorityError> for RewardError {
    fn from(e: AuthorityError) -> Self {
        match e {
            AuthorityError::NoPendingAuthority => RewardError::NoPendingAuthority,
            AuthorityError::NotAuthority | AuthorityError::NotPendingAuthority => {
                RewardError::Unauthorized
            }
        }
    }
}
