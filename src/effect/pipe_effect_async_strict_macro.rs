//! The `pipe_effect_async_strict!` and `pipe_effect_async_strict_fn!`
//! macros for asynchronous composition across distinct effect payloads.
//!
//! Same operator surface as
//! [`pipe_effect_async!`](crate::pipe_effect_async) (`=>` / `=>>` / comma),
//! same strict sequencing and short-circuiting, but every step result is
//! lifted through
//! [`IntoStrictPipeResult`](crate::effect::IntoStrictPipeResult) so that
//! steps carrying different effect payload types can share one pipeline.
//! The pipeline's payload type is the union type the caller annotates, and
//! each step's payload widens into it via [`Into`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use fp_pack::effect::{PipeResult, SideEffect};
//! use fp_pack::pipe_effect_async_strict;
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupEffect {
//!     Underage(String),
//!     NameTaken(u32),
//! }
//!
//! impl From<String> for SignupEffect {
//!     fn from(reason: String) -> Self {
//!         Self::Underage(reason)
//!     }
//! }
//!
//! impl From<u32> for SignupEffect {
//!     fn from(owner: u32) -> Self {
//!         Self::NameTaken(owner)
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
//! async fn check_name(age: i32) -> PipeResult<i32, u32> {
//!     PipeResult::Value(age)
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let result: PipeResult<i32, SignupEffect> = pipe_effect_async_strict!(
//!         20,
//!         check_age,
//!         =>> check_name,
//!     )
//!     .await;
//!     assert_eq!(result.unwrap_value(), 20);
//! }
//! ```

/// Pipes a value through effect-aware steps asynchronously, widening each
/// step's effect payload into one annotated union type.
///
/// The strict async variant of [`pipe_effect_async!`](crate::pipe_effect_async):
/// identical operators and sequencing, but step results are lifted through
/// [`IntoStrictPipeResult`](crate::effect::IntoStrictPipeResult) instead of
/// [`IntoPipeResult`](crate::effect::IntoPipeResult). Each step may carry
/// its own payload type `E_i` as long as `E_i: Into<E>` for the pipeline's
/// annotated payload type `E`. Widening a pending effect stays lazy and
/// keeps its label.
///
/// # Syntax
///
/// - `pipe_effect_async_strict!(input)` - Normalizes `input`
/// - `pipe_effect_async_strict!(input, f)` / `(input, => f)` - Sync step
/// - `pipe_effect_async_strict!(input, =>> f)` - Async step; awaited
/// - Steps chain and mix exactly as in `pipe_effect_async!`
///
/// # Type Constraints
///
/// The union payload type rarely flows out of the steps themselves; bind
/// the awaited result with an explicit `PipeResult<T, Union>` annotation.
///
/// # Examples
///
/// ```rust,ignore
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect_async_strict;
///
/// #[derive(Debug, PartialEq)]
/// enum GuardEffect {
///     Text(String),
///     Code(i32),
/// }
///
/// impl From<String> for GuardEffect {
///     fn from(text: String) -> Self {
///         Self::Text(text)
///     }
/// }
///
/// impl From<i32> for GuardEffect {
///     fn from(code: i32) -> Self {
///         Self::Code(code)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let result: PipeResult<i32, GuardEffect> = pipe_effect_async_strict!(
///         7,
///         => |n: i32| n * 2,
///         =>> |n: i32| async move {
///             if n > 100 {
///                 PipeResult::Effect(SideEffect::of(move || n))
///             } else {
///                 PipeResult::Value(n)
///             }
///         },
///     )
///     .await;
///     assert_eq!(result.unwrap_value(), 14);
/// }
/// ```
#[macro_export]
macro_rules! pipe_effect_async_strict {
    // Base case: input only - lift into the annotated payload type
    ($input:expr) => {{
        let __pipe_input = $input;
        async move { $crate::effect::IntoStrictPipeResult::into_strict_pipe_result(__pipe_input) }
    }};

    // Async step with optional trailing comma (terminal case) - highest priority
    ($input:expr, =>> $step:expr $(,)?) => {{
        let __pipe_input = $input;
        async move {
            match $crate::effect::IntoStrictPipeResult::into_strict_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    $crate::effect::IntoStrictPipeResult::into_strict_pipe_result(
                        $step(value).await,
                    )
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
            match $crate::effect::IntoStrictPipeResult::into_strict_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    let __pipe_intermediate = $step(value).await;
                    $crate::pipe_effect_async_strict!(__pipe_intermediate, $($rest)+).await
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
            match $crate::effect::IntoStrictPipeResult::into_strict_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    $crate::effect::IntoStrictPipeResult::into_strict_pipe_result($step(value))
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
            match $crate::effect::IntoStrictPipeResult::into_strict_pipe_result(__pipe_input) {
                $crate::effect::PipeResult::Value(value) => {
                    let __pipe_intermediate = $step(value);
                    $crate::pipe_effect_async_strict!(__pipe_intermediate, $($rest)+).await
                }
                $crate::effect::PipeResult::Effect(effect) => {
                    $crate::effect::PipeResult::Effect(effect)
                }
            }
        }
    }};

    // Comma syntax (implicit sync step) with optional trailing comma (terminal case)
    ($input:expr, $step:expr $(,)?) => {
        $crate::pipe_effect_async_strict!($input, => $step)
    };

    // Comma syntax (implicit sync step) with continuation
    ($input:expr, $step:expr, $($rest:tt)+) => {
        $crate::pipe_effect_async_strict!($input, => $step, $($rest)+)
    };
}

/// Builds a reusable strict async pipeline function (data-last form of
/// [`pipe_effect_async_strict!`]).
///
/// # Examples
///
/// ```rust,ignore
/// use fp_pack::effect::PipeResult;
/// use fp_pack::pipe_effect_async_strict_fn;
///
/// #[tokio::main]
/// async fn main() {
///     let pipeline = pipe_effect_async_strict_fn!(
///         => |n: i32| n + 1,
///         =>> |n: i32| async move { PipeResult::<i32, String>::Value(n * 2) },
///     );
///
///     let result: PipeResult<i32, String> = pipeline(20).await;
///     assert_eq!(result.unwrap_value(), 42);
/// }
/// ```
#[macro_export]
macro_rules! pipe_effect_async_strict_fn {
    ($($steps:tt)+) => {
        move |input| $crate::pipe_effect_async_strict!(input, $($steps)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::{PipeResult, SideEffect};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq, Eq)]
    enum SignupEffect {
        Underage(String),
        NameTaken(u32),
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

    fn check_age(age: i32) -> PipeResult<i32, String> {
        if age >= 18 {
            PipeResult::Value(age)
        } else {
            PipeResult::Effect(SideEffect::labeled(move || format!("ERR: {age}"), "age"))
        }
    }

    async fn check_name(age: i32) -> PipeResult<i32, u32> {
        if age == 33 {
            PipeResult::Effect(SideEffect::labeled(|| 404_u32, "name"))
        } else {
            PipeResult::Value(age)
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_all_values() {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_async_strict!(20, check_age, =>> check_name).await;
        assert_eq!(result.unwrap_value(), 20);
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_widens_sync_step_effect() {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_async_strict!(5, check_age, =>> check_name).await;

        let effect = result.unwrap_effect();
        assert_eq!(effect.label(), Some("age"));
        assert_eq!(effect.run(), SignupEffect::Underage("ERR: 5".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_widens_async_step_effect() {
        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_async_strict!(33, check_age, =>> check_name).await;

        let effect = result.unwrap_effect();
        assert_eq!(effect.label(), Some("name"));
        assert_eq!(effect.run(), SignupEffect::NameTaken(404));
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_short_circuit_skips_async_step() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let later_calls_clone = later_calls.clone();

        let result: PipeResult<i32, SignupEffect> = pipe_effect_async_strict!(
            5,
            check_age,
            =>> move |n: i32| {
                let calls = later_calls_clone.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    PipeResult::<i32, u32>::Value(n)
                }
            },
        )
        .await;

        assert!(result.is_effect());
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_widening_is_lazy() {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_clone = runs.clone();

        let guard = move |_: i32| -> PipeResult<i32, String> {
            let runs = runs_clone.clone();
            PipeResult::Effect(SideEffect::labeled(
                move || {
                    runs.fetch_add(1, Ordering::SeqCst);
                    "guarded".to_string()
                },
                "counting",
            ))
        };

        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_async_strict!(1, guard, =>> check_name).await;

        let effect = result.unwrap_effect();
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(effect.label(), Some("counting"));
        assert_eq!(effect.run(), SignupEffect::Underage("guarded".to_string()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_effect_input_is_widened() {
        let pending: SideEffect<u32> = SideEffect::labeled(|| 404_u32, "upstream");

        let result: PipeResult<i32, SignupEffect> =
            pipe_effect_async_strict!(pending, check_age).await;

        let effect = result.unwrap_effect();
        assert_eq!(effect.label(), Some("upstream"));
        assert_eq!(effect.run(), SignupEffect::NameTaken(404));
    }

    #[rstest]
    #[tokio::test]
    async fn test_strict_async_fn_is_reusable() {
        let pipeline = pipe_effect_async_strict_fn!(check_age, =>> check_name);

        let adult: PipeResult<i32, SignupEffect> = pipeline(20).await;
        assert_eq!(adult.unwrap_value(), 20);

        let minor: PipeResult<i32, SignupEffect> = pipeline(5).await;
        assert_eq!(minor.unwrap_effect().label(), Some("age"));
    }
}
