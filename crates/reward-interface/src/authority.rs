//! Authority transfer helpers.
//!
//! Provides a trait and helper functions for two-step authority transfer,
//! shared by the reward ledger config (pool factory authority) and the
//! registry config (owner).
//!
//! # Usage
//!
//! 1. Implement `HasAuthority` for your config type
//! 2. Call `transfer_authority_impl` or `accept_authority_impl` from your entry point
//! 3. Map [`AuthorityError`] into your crate's error type
//!
//! # Example
//!
//! ```ignore
//! impl HasAuthority for LedgerConfig {
//!     fn authority(&self) -> &Pubkey { &self.authority }
//!     fn authority_mut(&mut self) -> &mut Pubkey { &mut self.authority }
//!     fn pending_authority(&self) -> &Pubkey { &self.pending_authority }
//!     fn pending_authority_mut(&mut self) -> &mut Pubkey { &mut self.pending_authority }
//! }
//!
//! pub fn transfer_authority(&mut self, caller: &Pubkey, new_authority: &Pubkey) -> Result<(), RewardError> {
//!     transfer_authority_impl(&mut self.config, caller, new_authority)?;
//!     Ok(())
//! }
//! ```

use pinocchio::pubkey::Pubkey;

/// Failure reasons for authority checks and transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorityError {
    /// Caller is not the current authority
    NotAuthority,
    /// No transfer has been initiated
    NoPendingAuthority,
    /// Caller is not the pending authority
    NotPendingAuthority,
}

/// Trait for config types that support two-step authority transfer.
pub trait HasAuthority {
    /// Get the current authority pubkey.
    fn authority(&self) -> &Pubkey;
    /// Get mutable reference to authority pubkey.
    fn authority_mut(&mut self) -> &mut Pubkey;
    /// Get the pending authority pubkey.
    fn pending_authority(&self) -> &Pubkey;
    /// Get mutable reference to pending authority pubkey.
    fn pending_authority_mut(&mut self) -> &mut Pubkey;
}

/// Check that `caller` is the current authority.
#[inline]
pub fn require_authority<T: HasAuthority>(config: &T, caller: &Pubkey) -> Result<(), AuthorityError> {
    if config.authority() != caller {
        return Err(AuthorityError::NotAuthority);
    }
    Ok(())
}

/// Implements the transfer_authority logic for any config implementing `HasAuthority`.
///
/// Sets the pending_authority field to the new authority address.
///
/// # Returns
/// * `Ok(())` if the transfer was initiated
/// * `Err(AuthorityError::NotAuthority)` if caller is not the current authority
#[inline]
pub fn transfer_authority_impl<T: HasAuthority>(
    config: &mut T,
    caller: &Pubkey,
    new_authority: &Pubkey,
) -> Result<(), AuthorityError> {
    require_authority(config, caller)?;

    *config.pending_authority_mut() = *new_authority;

    Ok(())
}

/// Implements the accept_authority logic for any config implementing `HasAuthority`.
///
/// Completes the two-step transfer by moving pending_authority to authority.
///
/// # Returns
/// * `Ok(())` if the transfer was completed
/// * `Err(AuthorityError::NoPendingAuthority)` if no pending authority is set
/// * `Err(AuthorityError::NotPendingAuthority)` if caller is not the pending authority
#[inline]
pub fn accept_authority_impl<T: HasAuthority>(
    config: &mut T,
    caller: &Pubkey,
) -> Result<(), AuthorityError> {
    if *config.pending_authority() == Pubkey::default() {
        return Err(AuthorityError::NoPendingAuthority);
    }

    if config.pending_authority() != caller {
        return Err(AuthorityError::NotPendingAuthority);
    }

    *config.authority_mut() = *config.pending_authority();
    *config.pending_authority_mut() = Pubkey::default();

    Ok(())
}
