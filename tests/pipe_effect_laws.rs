#![cfg(feature = "effect")]
//! Property-based tests for pipeline composition laws.
//!
//! This module verifies the behavioral guarantees of the `pipe_effect!`
//! family:
//!
//! - **Value threading**: with total steps, the pipeline equals plain
//!   function application
//! - **Guard determinism**: whether and where a pipeline halts is a pure
//!   function of its input
//! - **First failure wins**: the leftover effect always comes from the
//!   earliest failing step
//! - **Effect passthrough**: an effect entering a pipeline leaves it with
//!   payload and label intact
//! - **Strict agreement**: the strict variant is behaviorally identical to
//!   the plain one when every step already shares one payload type
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use fp_pack::effect::{PipeResult, SideEffect};
use fp_pack::{pipe_effect, pipe_effect_strict};
use proptest::prelude::*;

fn reject_odd(n: i32) -> PipeResult<i32, String> {
    if n % 2 == 0 {
        PipeResult::Value(n)
    } else {
        PipeResult::Effect(SideEffect::labeled(move || format!("odd: {n}"), "odd-guard"))
    }
}

fn reject_negative(n: i32) -> PipeResult<i32, String> {
    if n >= 0 {
        PipeResult::Value(n)
    } else {
        PipeResult::Effect(SideEffect::labeled(
            move || format!("negative: {n}"),
            "negative-guard",
        ))
    }
}

// =============================================================================
// Value Threading Laws
// =============================================================================

proptest! {
    /// With total steps, pipe_effect! equals plain function application
    #[test]
    fn prop_total_steps_equal_function_application(x in any::<i32>()) {
        let add_one = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);

        let result: PipeResult<i32, String> = pipe_effect!(x, add_one, double);

        prop_assert_eq!(result.unwrap_value(), double(add_one(x)));
    }

    /// A value input with no steps normalizes to Value
    #[test]
    fn prop_input_only_normalizes_to_value(x in any::<i32>()) {
        let result: PipeResult<i32, String> = pipe_effect!(x);
        prop_assert_eq!(result.unwrap_value(), x);
    }
}

// =============================================================================
// Guard Determinism Laws
// =============================================================================

proptest! {
    /// Whether the pipeline halts is a pure function of the input
    #[test]
    fn prop_guard_outcome_is_deterministic(x in any::<i32>()) {
        let result = pipe_effect!(x, reject_odd);

        if x % 2 == 0 {
            prop_assert_eq!(result.unwrap_value(), x);
        } else {
            let effect = result.unwrap_effect();
            prop_assert_eq!(effect.label(), Some("odd-guard"));
            prop_assert_eq!(effect.run(), format!("odd: {x}"));
        }
    }

    /// The leftover effect comes from the earliest failing guard
    #[test]
    fn prop_first_failure_wins(x in any::<i32>()) {
        let result = pipe_effect!(x, reject_negative, reject_odd);

        let expected_label = if x < 0 {
            Some("negative-guard")
        } else if x % 2 != 0 {
            Some("odd-guard")
        } else {
            None
        };

        match expected_label {
            None => prop_assert!(result.is_value()),
            Some(label) => {
                let effect = result.unwrap_effect();
                prop_assert_eq!(effect.label(), Some(label));
            }
        }
    }
}

// =============================================================================
// Effect Passthrough Laws
// =============================================================================

proptest! {
    /// An effect entering the pipeline leaves with payload and label intact
    #[test]
    fn prop_effect_input_passes_through_unchanged(payload in any::<String>()) {
        let expected = payload.clone();
        let pending = SideEffect::labeled(move || payload, "origin");

        let result = pipe_effect!(
            pending,
            |n: i32| n.wrapping_add(1),
            |n: i32| n.wrapping_mul(2),
            |n: i32| n.wrapping_sub(3),
        );

        let effect = result.unwrap_effect();
        prop_assert_eq!(effect.label(), Some("origin"));
        prop_assert_eq!(effect.run(), expected);
    }
}

// =============================================================================
// Boundary Execution Laws
// =============================================================================

proptest! {
    /// run() resolves both outcomes into one type
    #[test]
    fn prop_run_resolves_both_outcomes(x in any::<i32>()) {
        let resolved = pipe_effect!(x, reject_odd, |n: i32| n.to_string()).run();

        let expected = if x % 2 == 0 {
            x.to_string()
        } else {
            format!("odd: {x}")
        };

        prop_assert_eq!(resolved, expected);
    }
}

// =============================================================================
// Strict Agreement Laws
// =============================================================================

proptest! {
    /// With one shared payload type the strict variant agrees with the plain one
    #[test]
    fn prop_strict_agrees_with_plain_for_uniform_payloads(x in any::<i32>()) {
        let plain = pipe_effect!(x, reject_negative, reject_odd);
        let strict: PipeResult<i32, String> = pipe_effect_strict!(x, reject_negative, reject_odd);

        let observe = |result: PipeResult<i32, String>| {
            result.fold(
                |n| (Some(n), None, None),
                |effect| {
                    let label = effect.label().map(str::to_string);
                    (None, label, Some(effect.run()))
                },
            )
        };

        prop_assert_eq!(observe(plain), observe(strict));
    }
}

// =============================================================================
// Async Agreement Laws
// =============================================================================

#[cfg(feature = "async")]
mod async_agreement {
    use super::*;
    use fp_pack::pipe_effect_async;

    proptest! {
        /// The async pipeline agrees with the sync pipeline on sync steps
        #[test]
        fn prop_async_agrees_with_sync_on_sync_steps(x in any::<i32>()) {
            let runtime = tokio::runtime::Runtime::new().unwrap();

            let sync_result = pipe_effect!(x, reject_negative, reject_odd);
            let async_result = runtime.block_on(async {
                pipe_effect_async!(x, reject_negative, reject_odd).await
            });

            let observe = |result: PipeResult<i32, String>| {
                result.fold(Ok, |effect| Err(effect.run()))
            };

            prop_assert_eq!(observe(sync_result), observe(async_result));
        }

        /// Awaiting the pipeline never runs the leftover effect
        #[test]
        fn prop_awaiting_does_not_run_the_leftover_effect(x in i32::MIN..0) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let runs = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));

            let runs_clone = runs.clone();
            let guard = move |n: i32| -> PipeResult<i32, String> {
                let runs = runs_clone.clone();
                PipeResult::Effect(SideEffect::of(move || {
                    runs.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    format!("halted: {n}")
                }))
            };

            let result = runtime.block_on(async {
                pipe_effect_async!(x, guard, |n: i32| n.wrapping_add(1)).await
            });

            prop_assert!(result.is_effect());
            prop_assert_eq!(runs.load(std::sync::atomic::Ordering::SeqCst), 0);
        }
    }
}
