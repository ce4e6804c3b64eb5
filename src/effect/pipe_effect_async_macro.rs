//! The `pipe_effect_async!` and `pipe_effect_async_fn!` macros for
//! asynchronous short-circuiting composition.
//!
//! This module provides the async counterpart of
//! [`pipe_effect!`](crate::pipe_effect). Steps settle strictly one after
//! another; the first step that produces a
//! [`SideEffect`](crate::effect::SideEffect) stops the pipeline, and no
//! later step starts. The whole pipeline is one lazy future: nothing runs
//! until it is awaited, and the leftover effect still never runs at all.
//!
//! # Operators
//!
//! - **Sync step** (`=>` or a bare comma): an ordinary function applied to
//!   the threaded value
//! - **Async step** (`=>>`): a function returning a future, awaited before
//!   its result is inspected
//!
//! # Failure Channel
//!
//! A step that panics (or a step future that panics when awaited) unwinds
//! through the pipeline future untouched. Only a returned `SideEffect`
//! short-circuits; the pipeline never converts a panic into an effect, and
//! never catches one.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust,ignore
//! use fp_pack::effect::{PipeResult, SideEffect};
//! use fp_pack::pipe_effect_async;
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
//! async fn load_score(age: i32) -> PipeResult<i32, String> {
//!     PipeResult::Value(age * 2)
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = pipe_effect_async!(
//!         20,
//!         check_age,
//!         =>> load_score,
//!         => |score: i32| score + 1,
//!     )
//!     .await;
//!     assert_eq!(result.unwrap_value(), 41);
//! }
//! ```
//!
//! ## Short-circuiting skips awaits
//!
//! ```rust,ignore
//! use fp_pack::effect::{PipeResult, SideEffect};
//! use fp_pack::pipe_effect_async;
//!
//! #[tokio::main]
//! async fn main() {
//!     let abort = |_: i32| -> PipeResult<i32, String> {
//!         PipeResult::Effect(SideEffect::of(|| "aborted".to_string()))
//!     };
//!
//!     let result = pipe_effect_async!(
//!         1,
//!         abort,
//!         =>> |n: i32| async move { PipeResult::<i32, String>::Value(n) },
//!     )
//!     .await;
//!
//!     // The async step was never started.
//!     assert!(result.is_effect());
//! }
//! ```

/// Pipes a value through effect-aware steps asynchronously, short-circuiting
/// on the first [`SideEffect`](crate::effect::SideEffect).
///
/// Returns a future resolving to a
/// [`PipeResult`](crate::effect::PipeResult). Steps settle strictly
/// sequentially: each async step (`=>>`) is awaited and its result inspected
/// before the next step is even constructed. Once a step produces an effect,
/// no later step runs and the same effect instance is returned, unrun.
///
/// # Syntax
///
/// - `pipe_effect_async!(input)` - Normalizes `input` into a ready future
/// - `pipe_effect_async!(input, f)` - Sync step (comma syntax)
/// - `pipe_effect_async!(input, => f)` - Sync step (explicit operator)
/// - `pipe_effect_async!(input, =>> f)` - Async step; `f(value)` is awaited
/// - `pipe_effect_async!(input, f, => g, =>> h, ...)` - Chain steps
///
/// # Evaluation
///
/// The input expression is evaluated eagerly at the call site (like any
/// argument); the steps run only when the returned future is awaited. A
/// pending `SideEffect` in the input or from a step is never run by the
/// pipeline, awaited or not.
///
/// # Type Constraints
///
/// Step returns (and the awaited output of `=>>` steps) go through
/// [`IntoPipeResult`](crate::effect::IntoPipeResult), exactly like the sync
/// pipeline, and all effects in one chain share a single payload type `E`.
/// For heterogeneous payloads use
/// [`pipe_effect_async_strict!`](crate::pipe_effect_async_strict).
///
/// # Examples
///
/// ```rust,ignore
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect_async;
///
/// async fn fetch_quota(user: u32) -> PipeResult<u32, String> {
///     if user == 0 {
///         PipeResult::Effect(SideEffect::labeled(
///             || "anonymous".to_string(),
///             "auth",
///         ))
///     } else {
///         PipeResult::Value(user * 10)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let granted = pipe_effect_async!(4_u32, =>> fetch_quota, => |q: u32| q + 2).await;
///     assert_eq!(granted.unwrap_value(), 42);
///
///     let denied = pipe_effect_async!(0_u32, =>> fetch_quota, => |q: u32| q + 2).await;
///     assert_eq!(denied.unwrap_effect().label(), Some("auth"));
/// }
/// ```
#[macro_export]
macro_rules! pipe_effect_async {
    // Base case: input only - normalize to PipeResult inside a ready future
    ($input:expr) => {{
        let __pipe_input = $input;
        async move { $crate::effect::IntoPipeResult::into_pipe_result(__pipe_input) }
    }};

    // Async step with optional trailing comma (terminal case) - highest priority
    ($input:expr, =>> $step:expr $(,)?) => {{
        let __pipe_input = $input;
        async move {
            match $crate::effect::IntoPipeResult::into_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    $crate::effect::IntoPipeResult::into_pipe_result($step(value).await)
                }
                $crate::effect::PipeResult::Effect(effect) => {
                    $crate::effect::PipeResult::Effect(effect)
                }
            }
        }
    }};

    // Async step with continuation - second priority
    ($input:expr, =>> $step:expr, $($rest:tt)+) => {{
        let __pipe_input = $input;
        async move {
            match $crate::effect::IntoPipeResult::into_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    let __pipe_intermediate = $step(value).await;
                    $crate::pipe_effect_async!(__pipe_intermediate, $($rest)+).await
                }
                $crate::effect::PipeResult::Effect(effect) => {
                    $crate::effect::PipeResult::Effect(effect)
                }
            }
        }
    }};

    // Sync step with optional trailing comma (terminal case)
    ($input:expr, => $step:expr $(,)?) => {{
        let __pipe_input = $input;
        async move {
            match $crate::effect::IntoPipeResult::into_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    $crate::effect::IntoPipeResult::into_pipe_result($step(value))
                }
                $crate::effect::PipeResult::Effect(effect) => {
                    $crate::effect::PipeResult::Effect(effect)
                }
            }
        }
    }};

    // Sync step with continuation
    ($input:expr, => $step:expr, $($rest:tt)+) => {{
        let __pipe_input = $input;
        async move {
            match $crate::effect::IntoPipeResult::into_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    let __pipe_intermediate = $step(value);
                    $crate::pipe_effect_async!(__pipe_intermediate, $($rest)+).await
                }
                $crate::effect::PipeResult::Effect(effect) => {
                    $crate::effect::PipeResult::Effect(effect)
                }
            }
        }
    }};

    // Comma syntax (implicit sync step) with optional trailing comma (terminal case)
    ($input:expr, $step:expr $(,)?) => {
        $crate::pipe_effect_async!($input, => $step)
    };

    // Comma syntax (implicit sync step) with continuation
    ($input:expr, $step:expr, $($rest:tt)+) => {
        $crate::pipe_effect_async!($input, => $step, $($rest)+)
    };
}

/// Builds a reusable async pipeline function (data-last form of
/// [`pipe_effect_async!`]).
///
/// `pipe_effect_async_fn!(f, =>> g)` returns a closure equivalent to
/// `|input| pipe_effect_async!(input, f, =>> g)`; calling it yields the
/// pipeline future for that input.
///
/// # Examples
///
/// ```rust,ignore
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect_async_fn;
///
/// fn check_age(age: i32) -> PipeResult<i32, String> {
///     if age >= 18 {
///         PipeResult::Value(age)
///     } else {
///         PipeResult::Effect(SideEffect::of(move || format!("ERR: {age}")))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let pipeline = pipe_effect_async_fn!(
///         check_age,
///         =>> |age: i32| async move { PipeResult::<i32, String>::Value(age * 2) },
///     );
///
///     assert_eq!(pipeline(20).await.unwrap_value(), 40);
///     assert!(pipeline(5).await.is_effect());
/// }
/// ```
#[macro_export]
macro_rules! pipe_effect_async_fn {
    ($($steps:tt)+) => {
        move |input| $crate::pipe_effect_async!(input, $($steps)+)
    };
}
