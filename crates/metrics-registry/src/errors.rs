//! Metrics registry errors.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use pinocchio::program_error::ProgramError;
use reward_interface::authority::AuthorityError;

/// Metrics registry error codes.
#[repr(u32)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, strum::IntoStaticStr,
)]
pub enum RegistryError {
    /// Caller is not the metrics factory
    #[strum(serialize = "illegal access")]
    Unauthorized = 0,
    /// Address is already a member
    #[strum(serialize = "already enabled")]
    AlreadyEnabled = 1,
    /// Address is not a member
    #[strum(serialize = "address is not group")]
    NotAGroup = 2,
    /// Registry is paused
    #[strum(serialize = "paused")]
    Paused = 3,
    /// Caller is not the owner
    #[strum(serialize = "caller is not the owner")]
    OwnerOnly = 4,
    /// Ownership transfer was never initiated
    #[strum(serialize = "no pending owner")]
    NoPendingOwner = 5,
    /// Arithmetic overflow
    #[strum(serialize = "arithmetic overflow")]
    ArithmeticOverflow = 6,
}

impl RegistryError {
    /// Human-readable failure reason.
    pub fn reason(self) -> &'static str {
        self.into()
    }
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}

impl From<RegistryError> for ProgramError {
    fn from(e: RegistryError) -> Self {
        ProgramError::Custom(e.into())
    }
}

impl From<AuthorityError> for RegistryError {
    fn from(e: AuthorityError) -> Self {
        match e {
            AuthorityError::NoPendingAuthority => RegistryError::NoPendingOwner,
            AuthorityError::NotAuthority | AuthorityError::NotPendingAuthority => {
                RegistryError::OwnerOnly
            }
        }
    }
}
