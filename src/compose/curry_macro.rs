//! The curry macro family for converting multi-argument functions to curried form.
//!
//! This module provides macros for currying functions with 2 to 4 arguments.
//! Currying transforms a function that takes multiple arguments into a sequence
//! of functions, each taking a single argument.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function and arguments
//! across multiple closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused
//! - Arguments that don't implement `Copy` to work correctly
//!
//! Note: The returned closures implement `Fn`, so they can be used with
//! `compose!`, `pipe!`, and as pipeline steps.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and returns
/// another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types must implement [`Clone`] (for reusability of partial applications)
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use fp_pack::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Partial application
///
/// ```
/// use fp_pack::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## Fixing a guard's threshold
///
/// ```
/// # #[cfg(feature = "effect")]
/// # {
/// use fp_pack::curry2;
/// use fp_pack::effect::{PipeResult, SideEffect};
/// use fp_pack::pipe_effect;
///
/// fn at_least(minimum: i32, age: i32) -> PipeResult<i32, String> {
///     if age >= minimum {
///         PipeResult::Value(age)
///     } else {
///         PipeResult::Effect(SideEffect::of(move || format!("ERR: {age}")))
///     }
/// }
///
/// let check_adult = curry2!(at_least)(18);
///
/// assert!(pipe_effect!(20, check_adult).is_value());
/// assert!(pipe_effect!(5, check_adult).is_effect());
/// # }
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given a function `f(a, b, c) -> d`, returns nested closures that take one
/// argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use fp_pack::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
/// ```
///
/// ## Step-by-step application
///
/// ```
/// use fp_pack::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let curried_clamp = curry3!(clamp);
/// let percent = curried_clamp(0)(100);
///
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// Given a function `f(a, b, c, d) -> e`, returns nested closures that take one
/// argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use fp_pack::curry4;
///
/// fn add_four(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(add_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}
