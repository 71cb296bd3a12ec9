//! Fixed-point reward arithmetic.
//!
//! Rewards are tracked per share with a cumulative index scaled by
//! [`ACCUMULATOR_PRECISION`]. Every division truncates, so the ledger can never
//! pay out more than it was given.
//!
//! ```text
//! index_delta  = amount × 1e18 / total_share_supply
//! holder_share = balance × (index_now − index_then) / 1e18
//! ```

/// Precision multiplier for the cumulative index (1e18).
///
/// Without scaling, `amount / total_share_supply` would truncate to 0 whenever
/// the allocated amount is smaller than the share supply (the common case).
///
/// `u64::MAX × 1e18` fits in u128, so a single allocation can never overflow
/// the scaled numerator.
pub const ACCUMULATOR_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Index increase produced by allocating `amount` over `total_share_supply`.
///
/// # Example
/// ```
/// use reward_interface::math::reward_per_share;
///
/// // 1000 reward units over 400 shares = 2.5 per share
/// assert_eq!(reward_per_share(1000, 400), Some(2_500_000_000_000_000_000));
///
/// // No supply, no basis for a split
/// assert_eq!(reward_per_share(1000, 0), None);
/// ```
///
/// # Returns
/// `None` if `total_share_supply` is zero or on overflow
#[inline]
pub fn reward_per_share(amount: u64, total_share_supply: u64) -> Option<u128> {
    if total_share_supply == 0 {
        return None;
    }
    (amount as u128)
        .checked_mul(ACCUMULATOR_PRECISION)?
        .checked_div(total_share_supply as u128)
}

/// Reward earned by `balance` shares while the index moved from
/// `settled_index` to `current_index`, rounded down.
///
/// Splits the index delta into whole and fractional parts so that
/// `floor(delta × balance / 1e18)` is computed without an intermediate
/// `delta × balance` product.
///
/// # Example
/// ```
/// use reward_interface::math::{reward_per_share, earned_between};
///
/// // 10 units over 3 shares: each share earns 3, one unit stays as dust
/// let index = reward_per_share(10, 3).unwrap();
/// assert_eq!(earned_between(index, 0, 1), Some(3));
/// assert_eq!(earned_between(index, 0, 3), Some(9));
/// ```
///
/// # Returns
/// `None` if `settled_index > current_index` or the result exceeds u64
#[inline]
pub fn earned_between(current_index: u128, settled_index: u128, balance: u64) -> Option<u64> {
    let delta = current_index.checked_sub(settled_index)?;
    let whole = (delta / ACCUMULATOR_PRECISION).checked_mul(balance as u128)?;
    let fraction = (delta % ACCUMULATOR_PRECISION)
        .checked_mul(balance as u128)?
        .checked_div(ACCUMULATOR_PRECISION)?;
    u64::try_from(whole.checked_add(fraction)?).ok()
}
