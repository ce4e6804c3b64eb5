//! Integration tests for the `pipe_effect_strict!` macro family.
//!
//! Tests for pipelines whose steps carry distinct effect payload types,
//! widened into one caller-named union type.

#![cfg(feature = "effect")]

use fp_pack::effect::{PipeResult, SideEffect};
use fp_pack::{pipe_effect, pipe_effect_strict, pipe_effect_strict_fn};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Signup validation scenario
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
enum SignupEffect {
    Underage(String),
    NameTaken(u32),
    Banned(char),
}

impl From<String> for SignupEffect {
    fn from(reason: String) -> Self {
        Self::Underage(reason)
    }
}

impl From<u32> for SignupEffect {
    fn from(owner: u32) -> Self {
        Self::NameTaken(owner)
    }
}

impl From<char> for SignupEffect {
    fn from(flag: char) -> Self {
        Self::Banned(flag)
    }
}

fn check_age(age: i32) -> PipeResult<i32, String> {
    if age >= 18 {
        PipeResult::Value(age)
    } else {
        PipeResult::Effect(SideEffect::labeled(move || format!("ERR: {age}"), "age"))
    }
}

fn check_name(age: i32) -> PipeResult<i32, u32> {
    if age == 33 {
        PipeResult::Effect(SideEffect::labeled(|| 404_u32, "name"))
    } else {
        PipeResult::Value(age)
    }
}

fn check_banlist(age: i32) -> PipeResult<i32, char> {
    if age == 66 {
        PipeResult::Effect(SideEffect::labeled(|| 'B', "banlist"))
    } else {
        PipeResult::Value(age)
    }
}

#[test]
fn test_three_guards_with_distinct_payloads_share_one_pipeline() {
    let result: PipeResult<i32, SignupEffect> =
        pipe_effect_strict!(20, check_age, check_name, check_banlist);

    assert_eq!(result.unwrap_value(), 20);
}

#[rstest]
#[case(5, "age")]
#[case(33, "name")]
#[case(66, "banlist")]
fn test_whichever_guard_fails_its_label_survives(#[case] age: i32, #[case] label: &str) {
    let result: PipeResult<i32, SignupEffect> =
        pipe_effect_strict!(age, check_age, check_name, check_banlist);

    assert_eq!(result.unwrap_effect().label(), Some(label));
}

#[test]
fn test_widened_payloads_land_in_the_right_variant() {
    let underage: PipeResult<i32, SignupEffect> =
        pipe_effect_strict!(5, check_age, check_name, check_banlist);
    assert_eq!(
        underage.unwrap_effect().run(),
        SignupEffect::Underage("ERR: 5".to_string())
    );

    let taken: PipeResult<i32, SignupEffect> =
        pipe_effect_strict!(33, check_age, check_name, check_banlist);
    assert_eq!(taken.unwrap_effect().run(), SignupEffect::NameTaken(404));

    let banned: PipeResult<i32, SignupEffect> =
        pipe_effect_strict!(66, check_age, check_name, check_banlist);
    assert_eq!(banned.unwrap_effect().run(), SignupEffect::Banned('B'));
}

#[test]
fn test_widening_never_runs_the_deferred_computation() {
    let runs = Arc::new(AtomicUsize::new(0));
    let runs_clone = runs.clone();

    let guard = move |_: i32| -> PipeResult<i32, String> {
        let runs = runs_clone.clone();
        PipeResult::Effect(SideEffect::of(move || {
            runs.fetch_add(1, Ordering::SeqCst);
            "halted".to_string()
        }))
    };

    let result: PipeResult<i32, SignupEffect> =
        pipe_effect_strict!(1, guard, check_name, check_banlist);

    let effect = result.unwrap_effect();
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(effect.run(), SignupEffect::Underage("halted".to_string()));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_exhaustive_union_handling_at_the_boundary() {
    let describe = |age: i32| -> String {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_strict!(age, check_age, check_name, check_banlist);

        result.fold(
            |n| format!("welcome, {n}"),
            |effect| match effect.run() {
                SignupEffect::Underage(reason) => reason,
                SignupEffect::NameTaken(owner) => format!("taken by {owner}"),
                SignupEffect::Banned(flag) => format!("banned ({flag})"),
            },
        )
    };

    assert_eq!(describe(20), "welcome, 20");
    assert_eq!(describe(5), "ERR: 5");
    assert_eq!(describe(33), "taken by 404");
    assert_eq!(describe(66), "banned (B)");
}

// =============================================================================
// Input widening
// =============================================================================

#[test]
fn test_pending_input_effect_is_widened_not_run() {
    let pending: SideEffect<u32> = SideEffect::labeled(|| 7_u32, "upstream");

    let result: PipeResult<i32, SignupEffect> = pipe_effect_strict!(pending, check_age);

    let effect = result.unwrap_effect();
    assert_eq!(effect.label(), Some("upstream"));
    assert_eq!(effect.run(), SignupEffect::NameTaken(7));
}

// =============================================================================
// Data-last form
// =============================================================================

#[test]
fn test_strict_fn_reuse_across_inputs() {
    let signup = pipe_effect_strict_fn!(check_age, check_name, check_banlist);

    let accepted: PipeResult<i32, SignupEffect> = signup(20);
    assert_eq!(accepted.unwrap_value(), 20);

    let rejected: PipeResult<i32, SignupEffect> = signup(33);
    assert_eq!(rejected.unwrap_effect().label(), Some("name"));
}

// =============================================================================
// Agreement with the plain pipeline
// =============================================================================

#[test]
fn test_strict_agrees_with_plain_when_payloads_already_match() {
    let value_strict: PipeResult<i32, String> = pipe_effect_strict!(20, check_age, |n: i32| n * 2);
    let value_plain: PipeResult<i32, String> = pipe_effect!(20, check_age, |n: i32| n * 2);
    assert_eq!(value_strict.unwrap_value(), value_plain.unwrap_value());

    let halted_strict: PipeResult<i32, String> = pipe_effect_strict!(5, check_age, |n: i32| n * 2);
    let halted_plain: PipeResult<i32, String> = pipe_effect!(5, check_age, |n: i32| n * 2);

    let strict_effect = halted_strict.unwrap_effect();
    let plain_effect = halted_plain.unwrap_effect();
    assert_eq!(strict_effect.label(), plain_effect.label());
    assert_eq!(strict_effect.run(), plain_effect.run());
}
