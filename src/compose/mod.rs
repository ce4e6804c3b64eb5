//! Plain function composition utilities.
//!
//! This module provides macros and functions for composing ordinary
//! functions in a functional programming style. These composers are
//! effect-blind: every step is applied unconditionally, and a
//! [`PipeResult`](crate::effect::PipeResult) flowing through them is just
//! another value. For left-to-right composition that short-circuits on
//! [`SideEffect`](crate::effect::SideEffect)s, use the pipeline macros in
//! [`effect`](crate::effect) instead.
//!
//! # Overview
//!
//! The module provides the following utilities:
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Compose functions left-to-right (data flow style)
//! - [`curry2!`] through [`curry4!`]: Convert multi-argument functions to curried form
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use fp_pack::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11); // add_one(double(5)) = add_one(10) = 11
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use fp_pack::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11); // add_one(double(5)) = 11
//! ```
//!
//! ## Currying
//!
//! ```
//! use fp_pack::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let curried_add = curry2!(add);
//! let add_five = curried_add(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Mathematical Background
//!
//! ## Function Composition
//!
//! Function composition creates a new function by combining two functions.
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! The [`compose!`] macro implements this right-to-left composition.
//!
//! ## Pipeline
//!
//! Pipeline is the reverse notation, reading left-to-right:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! The [`pipe!`] macro implements this pattern, which often matches the
//! mental model of data flowing through transformations.
//!
//! ## Currying
//!
//! Currying transforms a multi-argument function into a sequence of
//! single-argument functions:
//!
//! ```text
//! curry(f)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`

mod compose_macro;
mod curry_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::pipe;
