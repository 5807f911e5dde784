//! Property-based tests for the governed token's burn lifecycle and pause
//! semantics, driven by the framework harness.

extern crate std;

use proptest::prelude::*;

use test_framework::generators::*;
use test_framework::{TestEnv, TokenHarness, HARNESS_SUPPLY};
use token::burn::BURN_TIMELOCK;
use token::ContractError;

// ═════════════════════════════════════════════════════════════════════════════
//  Property-based tests
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// **Property**: open → cancel is a balance identity for any positive
    /// amount, and resets the burn slot.
    #[test]
    fn prop_open_cancel_identity(amount in positive_amount_strategy()) {
        let test_env = TestEnv::new();
        let harness = TokenHarness::new(&test_env);

        let owner_before = harness.owner_balance();
        harness.fund_custody(amount);
        harness.client.open_burn(&harness.owner, &amount);
        harness.client.cancel_burn(&harness.owner);

        prop_assert_eq!(harness.owner_balance(), owner_before,
            "cancel must restore the owner's pre-open balance exactly");
        prop_assert_eq!(harness.client.burn_info(), (0, 0));
        prop_assert_eq!(harness.total_supply(), HARNESS_SUPPLY);
    }

    /// **Property**: open → wait past the timelock → finish destroys exactly
    /// the opened amount, never the contract's later deposits.
    #[test]
    fn prop_open_finish_burns_exact_amount(
        amount in positive_amount_strategy(),
        extra in 1i128..=1_000_000i128,
        wait in late_offset_strategy(),
    ) {
        let test_env = TestEnv::new();
        let harness = TokenHarness::new(&test_env);

        harness.fund_custody(amount);
        harness.client.open_burn(&harness.owner, &amount);
        harness.fund_custody(extra);

        test_env.advance_time(wait);
        harness.client.finish_burn(&harness.owner);

        prop_assert_eq!(harness.total_supply(), HARNESS_SUPPLY - amount);
        prop_assert_eq!(harness.custody_balance(), extra,
            "deposits after open must survive the burn");
        prop_assert_eq!(harness.client.burn_info(), (0, 0));
    }

    /// **Property**: finish always fails while the timelock is running, and
    /// the pending record is left intact.
    #[test]
    fn prop_timelock_enforced(
        amount in positive_amount_strategy(),
        early in early_offset_strategy(),
    ) {
        let test_env = TestEnv::new();
        let harness = TokenHarness::new(&test_env);

        harness.fund_custody(amount);
        let opened_at = test_env.env.ledger().timestamp();
        harness.client.open_burn(&harness.owner, &amount);

        test_env.advance_time(early);
        let res = harness.client.try_finish_burn(&harness.owner);
        prop_assert_eq!(res.unwrap_err().unwrap(), ContractError::TimelockNotExpired);
        prop_assert_eq!(
            harness.client.burn_info(),
            (opened_at + BURN_TIMELOCK, amount)
        );
    }

    /// **Property**: zero and negative amounts are rejected everywhere.
    #[test]
    fn prop_invalid_amounts_rejected(amount in invalid_amount_strategy()) {
        let test_env = TestEnv::new();
        let harness = TokenHarness::new(&test_env);
        let dest = test_env.generate_address();

        prop_assert!(harness.client.try_open_burn(&harness.owner, &amount).is_err());
        prop_assert!(harness.client.try_transfer(&harness.owner, &dest, &amount).is_err());
        prop_assert!(harness
            .client
            .try_rescue_native(&harness.owner, &dest, &amount)
            .is_err());
    }

    /// **Property**: only one burn record can ever be active.
    #[test]
    fn prop_single_burn_slot(
        first in 1i128..=1_000_000i128,
        second in 1i128..=1_000_000i128,
    ) {
        let test_env = TestEnv::new();
        let harness = TokenHarness::new(&test_env);

        harness.fund_custody(first + second);
        harness.client.open_burn(&harness.owner, &first);

        let res = harness.client.try_open_burn(&harness.owner, &second);
        prop_assert_eq!(res.unwrap_err().unwrap(), ContractError::BurnAlreadyActive);

        // The original record is untouched.
        prop_assert_eq!(harness.client.burn_info().1, first);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Scenario tests
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn scenario_pause_freezes_maintenance_and_users_alike() {
    let test_env = TestEnv::new();
    let harness = TokenHarness::new(&test_env);
    let user = test_env.generate_address();

    harness.client.transfer(&harness.owner, &user, &1_000);
    harness.fund_custody(500);
    harness.client.open_burn(&harness.owner, &500);

    harness.client.pause(&harness.owner);

    assert!(harness.client.try_transfer(&user, &harness.owner, &1).is_err());
    assert!(harness.client.try_finish_burn(&harness.owner).is_err());
    assert!(harness.client.try_cancel_burn(&harness.owner).is_err());

    // Rescue stays available during the freeze.
    harness.fund_native(100);
    harness.client.rescue_native(&harness.owner, &user, &100);
    assert_eq!(harness.native_balance(&user), 100);

    harness.client.unpause(&harness.owner);
    harness.client.cancel_burn(&harness.owner);
    assert_eq!(harness.client.burn_info(), (0, 0));
}

#[test]
fn scenario_multisig_operates_burn_owner_keeps_the_keys() {
    let test_env = TestEnv::new();
    let harness = TokenHarness::new(&test_env);
    let msig = test_env.generate_address();

    harness.client.set_multisig(&harness.owner, &msig);
    harness.fund_custody(2_000);

    harness.client.open_burn(&msig, &2_000);
    test_env.advance_time(BURN_TIMELOCK + 1);
    harness.client.finish_burn(&msig);
    assert_eq!(harness.total_supply(), HARNESS_SUPPLY - 2_000);

    // The multisig cannot widen or move the admin set.
    let other = test_env.generate_address();
    assert_eq!(
        harness
            .client
            .try_set_multisig(&msig, &other)
            .unwrap_err()
            .unwrap(),
        ContractError::NotOwner
    );
    assert_eq!(
        harness
            .client
            .try_transfer_ownership(&msig, &other)
            .unwrap_err()
            .unwrap(),
        ContractError::NotOwner
    );
}
