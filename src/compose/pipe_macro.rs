//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies functions
//! from left to right, following the data flow style of programming.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" style of function application, where the value
/// flows through transformations in the order they are written. Every
/// function is applied unconditionally; nothing here inspects the value.
/// For a pipeline that stops at the first
/// [`SideEffect`](crate::effect::SideEffect), use
/// [`pipe_effect!`](crate::pipe_effect).
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f)(x)`.
///
/// While [`compose!`](crate::compose!) creates a new function, `pipe!` immediately
/// applies the transformations to a value.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once. This allows using functions that consume their
/// captured environment.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use fp_pack::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = add_one(10) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Type conversion through pipeline
///
/// ```
/// use fp_pack::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
///
/// ## With consuming closures
///
/// ```
/// use fp_pack::pipe;
///
/// fn consume_and_double(v: Vec<i32>) -> Vec<i32> {
///     v.into_iter().map(|x| x * 2).collect()
/// }
///
/// fn consume_and_filter(v: Vec<i32>) -> Vec<i32> {
///     v.into_iter().filter(|x| *x > 5).collect()
/// }
///
/// let result = pipe!(
///     vec![1, 2, 3, 4, 5],
///     consume_and_double,
///     consume_and_filter
/// );
/// assert_eq!(result, vec![6, 8, 10]);
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use fp_pack::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// // These are equivalent
/// let pipe_result = pipe!(10, f, g, h);
/// let compose_result = compose!(h, g, f)(10);
///
/// assert_eq!(pipe_result, compose_result);
/// ```
///
/// ## Effect-capable steps do not fit
///
/// `pipe!` applies every function unconditionally, so a step that returns a
/// [`PipeResult`](crate::effect::PipeResult) cannot feed a step expecting the
/// plain value. Once a chain can produce a
/// [`SideEffect`](crate::effect::SideEffect), every downstream composer has
/// to be effect-aware; use [`pipe_effect!`](crate::pipe_effect) instead:
///
/// ```compile_fail
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe;
///
/// fn check_age(age: i32) -> PipeResult<i32, String> {
///     if age >= 18 {
///         PipeResult::Value(age)
///     } else {
///         PipeResult::Effect(SideEffect::of(move || format!("denied: {age}")))
///     }
/// }
///
/// fn double(age: i32) -> i32 { age * 2 }
///
/// // error: `double` expects an i32, not a PipeResult
/// let result = pipe!(15, check_age, double);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
