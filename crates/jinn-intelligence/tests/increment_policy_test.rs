// ABOUTME: Tests for weight increment policies and the exact-name policy table
// ABOUTME: Stepped ceilings, fixed machine increments, and table overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use jinn_intelligence::{IncrementPolicy, IncrementPolicyTable};

#[test]
fn test_stepped_candidates_up_to_ceiling() {
    let policy = IncrementPolicy::default();
    assert_eq!(policy.candidates(40.0, 0.10), vec![1.25, 2.5, 3.75]);
    assert_eq!(policy.candidates(100.0, 0.10).len(), 8);
}

#[test]
fn test_stepped_candidates_empty_for_light_weights() {
    let policy = IncrementPolicy::default();
    assert!(policy.candidates(10.0, 0.10).is_empty());
    assert!(policy.candidates(0.0, 0.10).is_empty());
    assert!(policy.candidates(100.0, 0.0).is_empty());
}

#[test]
fn test_invalid_step_yields_no_candidates() {
    let policy = IncrementPolicy::Stepped { step: 0.0 };
    assert!(policy.candidates(100.0, 0.10).is_empty());
}

#[test]
fn test_fixed_policy_ignores_ceiling() {
    let policy = IncrementPolicy::Fixed { increment: 9.0 };
    assert_eq!(policy.candidates(20.0, 0.10), vec![9.0]);
    assert_eq!(policy.describe(), "fixed 9 kg");
}

#[test]
fn test_default_table_has_leg_press_override() {
    let table = IncrementPolicyTable::default();
    assert_eq!(
        table.policy_for("Leg Press Horizontal (Machine)"),
        IncrementPolicy::Fixed { increment: 9.0 }
    );
    assert_eq!(
        table.policy_for("Leg Press (Machine)"),
        IncrementPolicy::default()
    );
}

#[test]
fn test_table_overrides_and_default() {
    let table = IncrementPolicyTable::empty()
        .with_default_policy(IncrementPolicy::Stepped { step: 2.5 })
        .with_policy("Chest Fly (Machine)", IncrementPolicy::Fixed { increment: 5.0 });

    assert_eq!(
        table.policy_for("Chest Fly (Machine)"),
        IncrementPolicy::Fixed { increment: 5.0 }
    );
    assert_eq!(
        table.policy_for("Squat (Barbell)"),
        IncrementPolicy::Stepped { step: 2.5 }
    );
    assert!(IncrementPolicyTable::empty()
        .policy_for("Leg Press Horizontal (Machine)")
        .eq(&IncrementPolicy::default()));
}

#[test]
fn test_policy_serializes_with_kind_tag() {
    let json = serde_json::to_value(IncrementPolicy::Fixed { increment: 9.0 }).unwrap();
    assert_eq!(json["kind"], "fixed");
    assert_eq!(json["increment"], 9.0);
}
