//! The `pipe_effect_strict!` and `pipe_effect_strict_fn!` macros for
//! pipelines with a caller-named effect union.
//!
//! The plain [`pipe_effect!`](crate::pipe_effect) requires every step to
//! produce effects with one shared payload type. The strict variants lift
//! each step's effect payload into a single union type via [`Into`], so
//! steps with different payload types compose and the pipeline's result
//! type names exactly the set of effects it can produce. Handling the
//! result with an exhaustive `match` then covers every possible effect.
//!
//! Sequencing is identical to the plain variant: left to right, stop at the
//! first effect, never run anything. The lift is composed lazily onto the
//! deferred computation and preserves the label.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::{PipeResult, SideEffect};
//! use fp_pack::pipe_effect_strict;
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupEffect {
//!     Underage(String),
//!     NameTaken(u32),
//! }
//!
//! impl From<String> for SignupEffect {
//!     fn from(message: String) -> Self {
//!         Self::Underage(message)
//!     }
//! }
//!
//! impl From<u32> for SignupEffect {
//!     fn from(user_id: u32) -> Self {
//!         Self::NameTaken(user_id)
//!     }
//! }
//!
//! fn check_age(age: i32) -> PipeResult<i32, String> {
//!     if age >= 18 {
//!         PipeResult::Value(age)
//!     } else {
//!         PipeResult::Effect(SideEffect::of(move || format!("ERR: {age}")))
//!     }
//! }
//!
//! fn check_name(age: i32) -> PipeResult<i32, u32> {
//!     if age == 33 {
//!         PipeResult::Effect(SideEffect::of(|| 404_u32))
//!     } else {
//!         PipeResult::Value(age)
//!     }
//! }
//!
//! let result: PipeResult<i32, SignupEffect> =
//!     pipe_effect_strict!(33, check_age, check_name);
//!
//! // Exhaustive handling: the union enum names every producible effect.
//! let outcome = result.fold(
//!     |age| format!("registered at {age}"),
//!     |effect| match effect.run() {
//!         SignupEffect::Underage(message) => message,
//!         SignupEffect::NameTaken(user_id) => format!("taken by {user_id}"),
//!     },
//! );
//! assert_eq!(outcome, "taken by 404");
//! ```

/// Pipes a value through effect-aware steps, widening every effect payload
/// into a caller-named union type.
///
/// Behaves exactly like [`pipe_effect!`](crate::pipe_effect) at runtime:
/// strictly left to right, short-circuiting on the first effect, never
/// running anything. The difference is in the types: step returns are
/// normalized through
/// [`IntoStrictPipeResult`](crate::effect::IntoStrictPipeResult), which
/// lifts each effect payload into the pipeline's union type `E` via `Into`.
/// The lift is lazy (composed onto the thunk) and keeps the label.
///
/// # Syntax
///
/// Same as [`pipe_effect!`](crate::pipe_effect):
/// `pipe_effect_strict!(input, step, ...)`.
///
/// # Type Constraints
///
/// - The union type cannot be inferred from the steps alone; annotate the
///   result (`let r: PipeResult<T, MyEffect> = ...`).
/// - Every step's effect payload type must implement `Into` the union type.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect_strict;
///
/// #[derive(Debug, PartialEq)]
/// enum GuardEffect {
///     Message(String),
///     Code(u32),
/// }
///
/// impl From<String> for GuardEffect {
///     fn from(message: String) -> Self {
///         Self::Message(message)
///     }
/// }
///
/// impl From<u32> for GuardEffect {
///     fn from(code: u32) -> Self {
///         Self::Code(code)
///     }
/// }
///
/// fn text_guard(n: i32) -> PipeResult<i32, String> {
///     if n < 0 {
///         PipeResult::Effect(SideEffect::labeled(|| "negative".to_string(), "text"))
///     } else {
///         PipeResult::Value(n)
///     }
/// }
///
/// fn code_guard(n: i32) -> PipeResult<i32, u32> {
///     if n > 100 {
///         PipeResult::Effect(SideEffect::labeled(|| 413_u32, "code"))
///     } else {
///         PipeResult::Value(n)
///     }
/// }
///
/// let ok: PipeResult<i32, GuardEffect> =
///     pipe_effect_strict!(7, text_guard, code_guard, |n: i32| n * 3);
/// assert_eq!(ok.unwrap_value(), 21);
///
/// let too_big: PipeResult<i32, GuardEffect> =
///     pipe_effect_strict!(7, text_guard, |n: i32| n * 50, code_guard);
/// let effect = too_big.unwrap_effect();
/// assert_eq!(effect.label(), Some("code"));
/// assert_eq!(effect.run(), GuardEffect::Code(413));
/// ```
#[macro_export]
macro_rules! pipe_effect_strict {
    // Base case: input only - normalize and widen
    ($input:expr) => {
        $crate::effect::IntoStrictPipeResult::into_strict_pipe_result($input)
    };

    // Single step with optional trailing comma (terminal case)
    ($input:expr, $step:expr $(,)?) => {
        match $crate::effect::IntoStrictPipeResult::into_strict_pipe_result($input) {
            $crate::effect::PipeResult::Value(value) => {
                $crate::effect::IntoStrictPipeResult::into_strict_pipe_result($step(value))
            }
            $crate::effect::PipeResult::Effect(effect) => {
                $crate::effect::PipeResult::Effect(effect)
            }
        }
    };

    // Multiple steps: inspect, then recurse on the step's return
    ($input:expr, $step:expr, $($rest:tt)+) => {
        match $crate::effect::IntoStrictPipeResult::into_strict_pipe_result($input) {
            $crate::effect::PipeResult::Value(value) => {
                $crate::pipe_effect_strict!($step(value), $($rest)+)
            }
            $crate::effect::PipeResult::Effect(effect) => {
                $crate::effect::PipeResult::Effect(effect)
            }
        }
    };
}

/// Builds a reusable pipeline function with a caller-named effect union
/// (data-last form of [`pipe_effect_strict!`]).
///
/// `pipe_effect_strict_fn!(f, g)` returns a closure equivalent to
/// `|input| pipe_effect_strict!(input, f, g)`. The union type is fixed by
/// the closure's use site, typically with an annotated binding for the
/// result.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect_strict_fn;
///
/// #[derive(Debug, PartialEq)]
/// enum GuardEffect {
///     Message(String),
/// }
///
/// impl From<String> for GuardEffect {
///     fn from(message: String) -> Self {
///         Self::Message(message)
///     }
/// }
///
/// fn positive_only(n: i32) -> PipeResult<i32, String> {
///     if n > 0 {
///         PipeResult::Value(n)
///     } else {
///         PipeResult::Effect(SideEffect::of(move || format!("not positive: {n}")))
///     }
/// }
///
/// let pipeline = pipe_effect_strict_fn!(positive_only, |n: i32| n + 1);
///
/// let ok: PipeResult<i32, GuardEffect> = pipeline(2);
/// assert_eq!(ok.unwrap_value(), 3);
///
/// let aborted: PipeResult<i32, GuardEffect> = pipeline(-2);
/// assert_eq!(
///     aborted.unwrap_effect().run(),
///     GuardEffect::Message("not positive: -2".to_string()),
/// );
/// ```
#[macro_export]
macro_rules! pipe_effect_strict_fn {
    ($($steps:tt)+) => {
        move |input| $crate::pipe_effect_strict!(input, $($steps)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::{PipeResult, SideEffect};
    use crate::pipe_effect;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    enum SignupEffect {
        Underage(String),
        NameTaken(u32),
    }

    impl From<String> for SignupEffect {
        fn from(message: String) -> Self {
            Self::Underage(message)
        }
    }

    impl From<u32> for SignupEffect {
        fn from(user_id: u32) -> Self {
            Self::NameTaken(user_id)
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

    #[rstest]
    fn test_strict_value_path() {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_strict!(20, check_age, check_name, |age: i32| age * 2);
        assert_eq!(result.unwrap_value(), 40);
    }

    #[rstest]
    fn test_strict_widens_first_effect() {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_strict!(5, check_age, check_name);
        assert_eq!(
            result.unwrap_effect().run(),
            SignupEffect::Underage("ERR: 5".to_string()),
        );
    }

    #[rstest]
    fn test_strict_widens_second_effect() {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_strict!(33, check_age, check_name);
        assert_eq!(result.unwrap_effect().run(), SignupEffect::NameTaken(404));
    }

    #[rstest]
    fn test_strict_lift_preserves_label_and_laziness() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_clone = runs.clone();

        let counting_guard = move |_: i32| -> PipeResult<i32, String> {
            let runs_inner = runs_clone.clone();
            PipeResult::Effect(SideEffect::labeled(
                move || {
                    runs_inner.fetch_add(1, Ordering::SeqCst);
                    "guarded".to_string()
                },
                "counting",
            ))
        };

        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_strict!(1, counting_guard, check_name);

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        let effect = result.unwrap_effect();
        assert_eq!(effect.label(), Some("counting"));
        assert_eq!(
            effect.run(),
            SignupEffect::Underage("guarded".to_string()),
        );
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_strict_short_circuit_skips_later_steps() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let later_calls_clone = later_calls.clone();

        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_strict!(5, check_age, move |age: i32| {
                later_calls_clone.fetch_add(1, Ordering::SeqCst);
                age
            });

        assert!(result.is_effect());
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_strict_effect_input_short_circuits() {
        let pending = SideEffect::labeled(|| "upstream".to_string(), "source");
        let result: PipeResult<i32, SignupEffect> = pipe_effect_strict!(pending, check_name);

        let effect = result.unwrap_effect();
        assert_eq!(effect.label(), Some("source"));
        assert_eq!(
            effect.run(),
            SignupEffect::Underage("upstream".to_string()),
        );
    }

    #[rstest]
    fn test_strict_matches_plain_sequencing() {
        // With a single payload type the strict pipeline resolves exactly
        // like the plain one.
        let strict: PipeResult<i32, String> = pipe_effect_strict!(5, check_age, |n: i32| n * 2);
        let plain: PipeResult<i32, String> = pipe_effect!(5, check_age, |n: i32| n * 2);

        assert_eq!(strict.unwrap_effect().run(), plain.unwrap_effect().run());
    }

    #[rstest]
    fn test_strict_fn_is_reusable() {
        let pipeline = pipe_effect_strict_fn!(check_age, check_name);

        let taken: PipeResult<i32, SignupEffect> = pipeline(33);
        assert_eq!(taken.unwrap_effect().run(), SignupEffect::NameTaken(404));

        let passed: PipeResult<i32, SignupEffect> = pipeline(21);
        assert_eq!(passed.unwrap_value(), 21);
    }
}
