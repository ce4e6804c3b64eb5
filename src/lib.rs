//! # fp-pack
//!
//! Short-circuiting pipeline composition with explicit, deferred side effects.
//!
//! ## Overview
//!
//! This library provides a small protocol for sequential function composition
//! in which a step can abort the rest of the pipeline by returning a
//! [`SideEffect`](effect::SideEffect): a labeled, heap-allocated thunk that is
//! never executed automatically. The pipeline stops calling steps as soon as
//! one produces an effect and hands the untouched effect back to the caller,
//! who decides if and when to run it. It includes:
//!
//! - **Effect Container**: [`SideEffect`](effect::SideEffect), a deferred
//!   computation with an optional diagnostic label
//! - **Pipeline Result**: [`PipeResult`](effect::PipeResult), the two-sided
//!   outcome of a pipeline (plain value or pending effect)
//! - **Effect Pipelines**: `pipe_effect!`, `pipe_effect_async!` and their
//!   strict variants with caller-named effect unions
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!` through
//!   `curry4!` for ordinary (effect-unaware) steps
//! - **Retry Utilities**: [`retry`](effect::retry) and
//!   [`retry_with_backoff`](effect::retry_with_backoff) for fallible async
//!   operations
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `effect`: The `SideEffect` protocol and synchronous pipelines
//! - `async`: Asynchronous pipelines and retry utilities
//! - `full`: Enable all features
//!
//! ## Example
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
//!             move || format!("denied: {age}"),
//!             "age-check",
//!         ))
//!     }
//! }
//!
//! let accepted = pipe_effect!(20, check_age, |age: i32| age * 2);
//! assert_eq!(accepted.unwrap_value(), 40);
//!
//! let denied = pipe_effect!(17, check_age, |age: i32| age * 2);
//! assert!(denied.is_effect());
//!
//! // The effect has not run; executing it is an explicit, separate act.
//! let effect = denied.unwrap_effect();
//! assert_eq!(effect.label(), Some("age-check"));
//! assert_eq!(effect.run(), "denied: 17");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fp_pack::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
