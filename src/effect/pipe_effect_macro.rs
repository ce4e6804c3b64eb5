//! The `pipe_effect!` and `pipe_effect_fn!` macros for short-circuiting
//! left-to-right composition.
//!
//! This module provides the synchronous effect-aware pipeline. Steps are
//! applied in order; the first step that produces a
//! [`SideEffect`](crate::effect::SideEffect) stops the pipeline, and the
//! effect travels to the caller untouched and unrun.
//!
//! # Background
//!
//! An ordinary pipeline such as [`pipe!`](crate::pipe) threads a bare value
//! through its steps and has no notion of aborting. `pipe_effect!` threads a
//! [`PipeResult`](crate::effect::PipeResult) instead: every step return is
//! normalized through [`IntoPipeResult`](crate::effect::IntoPipeResult), the
//! pipeline inspects which side it got, and only the value side reaches the
//! next step. Effect execution is not the pipeline's business; whoever holds
//! the final result decides with
//! [`PipeResult::run`](crate::effect::PipeResult::run) or
//! [`PipeResult::fold`](crate::effect::PipeResult::fold).
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::{PipeResult, SideEffect};
//! use fp_pack::pipe_effect;
//!
//! fn check_age(age: i32) -> PipeResult<i32, String> {
//!     if age >= 18 {
//!         PipeResult::Value(age)
//!     } else {
//!         PipeResult::Effect(SideEffect::labeled(
//!             move || format!("ERR: {age}"),
//!             "got-ERR",
//!         ))
//!     }
//! }
//!
//! let accepted = pipe_effect!(20, check_age, |age: i32| age * 2);
//! assert_eq!(accepted.unwrap_value(), 40);
//!
//! let rejected = pipe_effect!(5, check_age, |age: i32| age * 2);
//! let effect = rejected.unwrap_effect();
//! assert_eq!(effect.label(), Some("got-ERR"));
//! assert_eq!(effect.run(), "ERR: 5");
//! ```

/// Pipes a value through effect-aware steps, short-circuiting on the first
/// [`SideEffect`](crate::effect::SideEffect).
///
/// Steps run strictly left to right. Each step receives the plain value
/// produced by the previous one; its return is normalized through
/// [`IntoPipeResult`](crate::effect::IntoPipeResult). As soon as a step
/// produces an effect, no later step is called and the same effect instance
/// is returned, unrun, inside
/// [`PipeResult::Effect`](crate::effect::PipeResult::Effect).
///
/// # Syntax
///
/// - `pipe_effect!(input)` - Normalizes `input` to a `PipeResult`
/// - `pipe_effect!(input, f)` - Applies `f` if `input` is not an effect
/// - `pipe_effect!(input, f, g, ...)` - Chains steps with short-circuiting
///
/// # Input Conversion
///
/// The input goes through the same normalization as step returns:
/// - `PipeResult<T, E>` is used unchanged, so the output of one pipeline can
///   seed another
/// - `SideEffect<E>` short-circuits immediately; no step runs
/// - Plain scalar types and `String` enter as values; user-defined types are
///   wrapped with [`Plain`](crate::effect::Plain)
///
/// # Type Constraints
///
/// All effects in one chain share a single payload type `E`. When steps
/// produce effects with different payload types, name the union with the
/// strict variant, [`pipe_effect_strict!`](crate::pipe_effect_strict). When
/// no step can produce an effect at all, `E` is unconstrained and needs an
/// annotation on the result.
///
/// # Examples
///
/// ## Value path
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect;
///
/// fn reject_zero(n: i32) -> PipeResult<i32, String> {
///     if n == 0 {
///         PipeResult::Effect(SideEffect::of(|| "zero".to_string()))
///     } else {
///         PipeResult::Value(n)
///     }
/// }
///
/// let result = pipe_effect!(3, reject_zero, |n: i32| n + 1, |n: i32| n * 10);
/// assert_eq!(result.unwrap_value(), 40);
/// ```
///
/// ## Short-circuit: later steps never run
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let later_calls = Arc::new(AtomicUsize::new(0));
/// let later_calls_clone = later_calls.clone();
///
/// let abort = |_: i32| -> PipeResult<i32, String> {
///     PipeResult::Effect(SideEffect::of(|| "aborted".to_string()))
/// };
///
/// let result = pipe_effect!(1, abort, move |n: i32| {
///     later_calls_clone.fetch_add(1, Ordering::SeqCst);
///     n
/// });
///
/// assert!(result.is_effect());
/// assert_eq!(later_calls.load(Ordering::SeqCst), 0);
/// ```
///
/// ## Input already an effect
///
/// ```rust
/// use fp_pack::effect::SideEffect;
/// use fp_pack::pipe_effect;
///
/// let pending = SideEffect::labeled(|| "upstream".to_string(), "source");
/// let result = pipe_effect!(pending, |n: i32| n + 1);
///
/// // The step was never called; the effect is returned as-is.
/// assert_eq!(result.unwrap_effect().label(), Some("source"));
/// ```
///
/// ## Chaining pipelines
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect;
///
/// fn positive_only(n: i32) -> PipeResult<i32, String> {
///     if n > 0 {
///         PipeResult::Value(n)
///     } else {
///         PipeResult::Effect(SideEffect::of(move || format!("not positive: {n}")))
///     }
/// }
///
/// let first = pipe_effect!(2, positive_only, |n: i32| n - 5);
/// let second = pipe_effect!(first, positive_only, |n: i32| n * 10);
///
/// // The first pipeline completed with -3; the second aborted on it.
/// assert_eq!(second.unwrap_effect().run(), "not positive: -3");
/// ```
#[macro_export]
macro_rules! pipe_effect {
    // Base case: input only - normalize to PipeResult
    ($input:expr) => {
        $crate::effect::IntoPipeResult::into_pipe_result($input)
    };

    // Single step with optional trailing comma (terminal case)
    ($input:expr, $step:expr $(,)?) => {
        match $crate::effect::IntoPipeResult::into_pipe_result($input) {
            $crate::effect::PipeResult::Value(value) => {
                $crate::effect::IntoPipeResult::into_pipe_result($step(value))
            }
            $crate::effect::PipeResult::Effect(effect) => {
                $crate::effect::PipeResult::Effect(effect)
            }
        }
    };

    // Multiple steps: inspect, then recurse on the step's return
    ($input:expr, $step:expr, $($rest:tt)+) => {
        match $crate::effect::IntoPipeResult::into_pipe_result($input) {
            $crate::effect::PipeResult::Value(value) => {
                $crate::pipe_effect!($step(value), $($rest)+)
            }
            $crate::effect::PipeResult::Effect(effect) => {
                $crate::effect::PipeResult::Effect(effect)
            }
        }
    };
}

/// Builds a reusable pipeline function from effect-aware steps (data-last
/// form of [`pipe_effect!`]).
///
/// `pipe_effect_fn!(f, g, h)` returns a closure equivalent to
/// `|input| pipe_effect!(input, f, g, h)`. The closure is reusable whenever
/// every step is (`Fn` rather than `FnOnce`).
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect_fn;
///
/// fn check_age(age: i32) -> PipeResult<i32, String> {
///     if age >= 18 {
///         PipeResult::Value(age)
///     } else {
///         PipeResult::Effect(SideEffect::labeled(
///             move || format!("ERR: {age}"),
///             "got-ERR",
///         ))
///     }
/// }
///
/// fn double(n: i32) -> i32 {
///     n * 2
/// }
///
/// let pipeline = pipe_effect_fn!(check_age, double);
///
/// assert_eq!(pipeline(20).unwrap_value(), 40);
/// assert_eq!(pipeline(5).unwrap_effect().label(), Some("got-ERR"));
/// ```
#[macro_export]
macro_rules! pipe_effect_fn {
    ($($steps:tt)+) => {
        move |input| $crate::pipe_effect!(input, $($steps)+)
    };
}
