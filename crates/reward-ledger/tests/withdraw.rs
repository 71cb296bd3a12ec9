//! Withdrawal and balance change hook tests.

mod common;

use common::*;
use reward_interface::ShareLedger;
use reward_ledger::{EventType, RewardError};

const SUPPLY: u64 = 10_000_000;

/// Withdrawals mint exactly the withdrawable amount to the holder.
#[test]
fn test_withdraw_mints_reward_token() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.allocate(50_000_000).unwrap();

    let prev_supply = protocol.mint.total_supply;
    let receipt = protocol.withdraw(&ALICE).unwrap();

    assert_eq!(receipt.value, 50_000_000);
    assert_eq!(protocol.mint.total_supply - prev_supply, 50_000_000);
    assert_eq!(protocol.mint.balance_of(&ALICE), 50_000_000);
    assert_eq!(receipt.events[0].event_type(), EventType::RewardsWithdrawn);
}

/// Each holder's withdrawable amount is the reward times its share of supply.
#[test]
fn test_withdrawable_amount_follows_holdings() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.transfer(&ALICE, &BOB, SUPPLY / 5).unwrap();
    protocol.allocate(123_456_789).unwrap();

    let total = protocol.rewards_amount() as u64;
    assert_eq!(protocol.withdrawable(&ALICE), total * 8 / 10);
    assert_eq!(protocol.withdrawable(&BOB), total * 2 / 10);
    assert!(protocol.withdrawable(&ALICE) + protocol.withdrawable(&BOB) <= total);
}

/// The withdrawal is always the full withdrawable amount.
#[test]
fn test_withdraw_pays_full_withdrawable_amount() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.transfer(&ALICE, &BOB, SUPPLY / 5).unwrap();
    protocol.allocate(123_456_789).unwrap();

    let amount_alice = protocol.withdrawable(&ALICE);
    let amount_bob = protocol.withdrawable(&BOB);
    protocol.withdraw(&ALICE).unwrap();
    protocol.withdraw(&BOB).unwrap();

    assert_eq!(protocol.mint.balance_of(&ALICE), amount_alice);
    assert_eq!(protocol.mint.balance_of(&BOB), amount_bob);
}

/// A holder with nothing owed cannot withdraw, and nothing is minted.
#[test]
fn test_withdraw_zero_amount_fails() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.allocate(1_000_000).unwrap();

    assert_eq!(protocol.withdrawable(&BOB), 0);
    let result = protocol.withdraw(&BOB);

    assert_fails(result, RewardError::ZeroWithdrawal);
    assert_eq!(RewardError::ZeroWithdrawal.reason(), "withdraw value is 0");
    assert_eq!(protocol.mint.balance_of(&BOB), 0);
    assert!(protocol.ledger.holder(&POOL, &BOB).is_none());
}

/// After withdrawing, the entitlement is zero until something changes.
#[test]
fn test_withdraw_zeroes_entitlement() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.allocate(9_999).unwrap();

    protocol.withdraw(&ALICE).unwrap();
    assert_eq!(protocol.withdrawable(&ALICE), 0);
    assert_fails(protocol.withdraw(&ALICE), RewardError::ZeroWithdrawal);

    protocol.allocate(1_000).unwrap();
    assert_eq!(protocol.withdrawable(&ALICE), 1_000);
}

/// Repeated queries never change what a holder eventually receives.
#[test]
fn test_queries_do_not_mutate() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.transfer(&ALICE, &BOB, SUPPLY / 4).unwrap();
    protocol.allocate(4_000_000).unwrap();

    let before_alice = *protocol.ledger.holder(&POOL, &ALICE).unwrap();
    for _ in 0..3 {
        protocol.withdrawable(&ALICE);
        protocol.withdrawable(&BOB);
        protocol.rewards_amount();
    }

    assert_eq!(*protocol.ledger.holder(&POOL, &ALICE).unwrap(), before_alice);
    assert_eq!(protocol.withdraw(&BOB).unwrap().value, 1_000_000);
}

/// Alice sends 20% to Bob, rewards arrive, then she sends another 10%.
mod alice_sends_bob_ten_percent_after_twenty {
    use super::*;

    const FIRST: u64 = 123_456_789;
    const SECOND: u64 = 987_654_321;

    fn before_increment() -> Protocol {
        let mut protocol = Protocol::new(SUPPLY);
        protocol.transfer(&ALICE, &BOB, SUPPLY / 5).unwrap();
        protocol.allocate(FIRST).unwrap();
        protocol.transfer(&ALICE, &BOB, SUPPLY / 10).unwrap();
        protocol
    }

    fn after_increment() -> Protocol {
        let mut protocol = before_increment();
        protocol.allocate(SECOND).unwrap();
        protocol
    }

    #[test]
    fn test_alice_keeps_eighty_percent_of_first_reward() {
        let protocol = before_increment();
        assert_eq!(protocol.withdrawable(&ALICE), FIRST * 8 / 10);
    }

    #[test]
    fn test_bob_keeps_twenty_percent_of_first_reward() {
        let protocol = before_increment();
        assert_eq!(protocol.withdrawable(&BOB), FIRST * 2 / 10);
    }

    #[test]
    fn test_alice_gets_seventy_percent_of_second_reward() {
        let protocol = after_increment();
        let increase = protocol.rewards_amount() as u64 - FIRST;
        assert_eq!(increase, SECOND);
        assert_eq!(
            protocol.withdrawable(&ALICE),
            FIRST * 8 / 10 + SECOND * 7 / 10
        );
    }

    #[test]
    fn test_bob_gets_thirty_percent_of_second_reward() {
        let protocol = after_increment();
        assert_eq!(
            protocol.withdrawable(&BOB),
            FIRST * 2 / 10 + SECOND * 3 / 10
        );
    }

    #[test]
    fn test_both_zero_after_withdrawing() {
        let mut protocol = after_increment();
        protocol.withdraw(&ALICE).unwrap();
        protocol.withdraw(&BOB).unwrap();

        assert_eq!(protocol.withdrawable(&ALICE), 0);
        assert_eq!(protocol.withdrawable(&BOB), 0);
    }

    #[test]
    fn test_hook_rejects_non_token_ledger_caller() {
        let mut protocol = after_increment();
        let before_alice = *protocol.ledger.holder(&POOL, &ALICE).unwrap();
        let before_bob = *protocol.ledger.holder(&POOL, &BOB).unwrap();

        let result = protocol
            .ledger
            .before_balance_change(&ALICE, &POOL, &ALICE, &BOB, 1);

        assert_fails(result, RewardError::Unauthorized);
        assert_eq!(*protocol.ledger.holder(&POOL, &ALICE).unwrap(), before_alice);
        assert_eq!(*protocol.ledger.holder(&POOL, &BOB).unwrap(), before_bob);
    }
}

/// A zero-amount hook call only settles, creating the recipient's account.
#[test]
fn test_direct_hook_call_preserves_entitlements() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.transfer(&ALICE, &BOB, SUPPLY / 2).unwrap();
    protocol.allocate(2_000_000).unwrap();

    protocol
        .ledger
        .before_balance_change(&TOKEN_LEDGER, &POOL, &ALICE, &CAROL, 0)
        .unwrap();

    let alice = protocol.ledger.holder(&POOL, &ALICE).unwrap();
    assert_eq!(alice.accrued, 1_000_000);
    assert_eq!(protocol.withdrawable(&ALICE), 1_000_000);
    assert_eq!(protocol.withdrawable(&CAROL), 0);
    assert_eq!(protocol.ledger.holder(&POOL, &CAROL).unwrap().balance, 0);
}

/// A token ledger that calls the hook and then moves its own balances keeps
/// the snapshots in step, so later allocations follow the new holdings.
#[test]
fn test_hook_then_external_move_follows_new_holdings() {
    let mut protocol = Protocol::new(1_000);
    protocol.allocate(1_000).unwrap();

    protocol
        .ledger
        .before_balance_change(&TOKEN_LEDGER, &POOL, &ALICE, &BOB, 500)
        .unwrap();
    protocol.shares.move_shares(&POOL, &ALICE, &BOB, 500).unwrap();

    for holder in [ALICE, BOB] {
        assert_eq!(
            protocol.ledger.holder(&POOL, &holder).unwrap().balance,
            protocol.shares.balance_of(&POOL, &holder)
        );
    }

    protocol.allocate(1_000).unwrap();

    assert_eq!(protocol.withdrawable(&ALICE), 1_500);
    assert_eq!(protocol.withdrawable(&BOB), 500);
}

/// The hook refuses to move more shares than the sender's snapshot holds.
#[test]
fn test_hook_over_balance_fails() {
    let mut protocol = Protocol::new(1_000);
    protocol.allocate(1_000).unwrap();
    let before_alice = *protocol.ledger.holder(&POOL, &ALICE).unwrap();

    let result = protocol
        .ledger
        .before_balance_change(&TOKEN_LEDGER, &POOL, &ALICE, &BOB, 1_001);

    assert_fails(result, RewardError::InsufficientShares);
    assert_eq!(*protocol.ledger.holder(&POOL, &ALICE).unwrap(), before_alice);
    assert!(protocol.ledger.holder(&POOL, &BOB).is_none());
}

/// A transfer the share ledger rejects leaves the reward state untouched.
#[test]
fn test_rejected_transfer_rolls_back() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.allocate(5_000_000).unwrap();
    let before = protocol.ledger.clone();

    protocol.shares.reject_next = true;
    let result = protocol.transfer(&ALICE, &BOB, 1_000);

    assert_fails(result, RewardError::TransferRejected);
    assert_eq!(
        protocol.ledger.holder(&POOL, &ALICE),
        before.holder(&POOL, &ALICE)
    );
    assert!(protocol.ledger.holder(&POOL, &BOB).is_none());
    assert_eq!(protocol.shares.balance_of(&POOL, &ALICE), SUPPLY);
}

/// A failed payout leaves the holder's accrued amount in place.
#[test]
fn test_failed_payout_rolls_back() {
    let mut protocol = Protocol::new(SUPPLY);
    protocol.allocate(5_000_000).unwrap();

    protocol.mint.fail = true;
    assert_fails(protocol.withdraw(&ALICE), RewardError::PayoutFailed);
    assert_eq!(protocol.withdrawable(&ALICE), 5_000_000);

    protocol.mint.fail = false;
    assert_eq!(protocol.withdraw(&ALICE).unwrap().value, 5_000_000);
}
