//! The side effect protocol: deferred effects and short-circuiting pipelines.
//!
//! This module provides an explicit representation for side effects. A
//! [`SideEffect`] wraps a computation without running it; pipelines built
//! with the `pipe_effect!` family stop at the first step that produces one
//! and return it untouched. Nothing in this module ever executes an effect
//! on its own.
//!
//! # The Container
//!
//! [`SideEffect`] holds a heap-allocated thunk and an optional diagnostic
//! label. Construction never runs the thunk:
//!
//! ```rust
//! use fp_pack::effect::SideEffect;
//!
//! let effect = SideEffect::labeled(|| "not old enough".to_string(), "age-check");
//! assert_eq!(effect.label(), Some("age-check"));
//!
//! // Running is a separate, explicit act that consumes the effect.
//! assert_eq!(effect.run(), "not old enough");
//! ```
//!
//! # Pipeline Results
//!
//! [`PipeResult`] is the outcome of a pipeline: either a plain value or a
//! pending effect. It carries the discrimination (`is_value` / `is_effect`),
//! case analysis ([`PipeResult::fold`]) and execution ([`PipeResult::run`])
//! operations:
//!
//! ```rust
//! use fp_pack::effect::{PipeResult, SideEffect};
//!
//! let pending: PipeResult<i32, String> =
//!     PipeResult::Effect(SideEffect::of(|| "fallback".to_string()));
//!
//! let message = pending.fold(
//!     |value| format!("value: {value}"),
//!     |effect| format!("pending effect: {:?}", effect.label()),
//! );
//! assert_eq!(message, "pending effect: None");
//! ```
//!
//! # Pipelines
//!
//! `pipe_effect!` composes steps left to right and short-circuits on the
//! first effect. Steps can return plain values, [`SideEffect`]s or
//! [`PipeResult`]s; the [`IntoPipeResult`] trait normalizes them:
//!
//! ```rust
//! use fp_pack::effect::{PipeResult, SideEffect};
//! use fp_pack::pipe_effect;
//!
//! fn reject_negative(value: i32) -> PipeResult<i32, String> {
//!     if value < 0 {
//!         PipeResult::Effect(SideEffect::of(move || format!("negative: {value}")))
//!     } else {
//!         PipeResult::Value(value)
//!     }
//! }
//!
//! let result = pipe_effect!(-4, reject_negative, |value: i32| value + 1);
//! assert!(result.is_effect());
//! ```
//!
//! The strict variants (`pipe_effect_strict!` and friends) additionally
//! widen every step's effect payload into a caller-named union type via
//! [`IntoStrictPipeResult`], so the pipeline's type names exactly the
//! effects it can produce.

// =============================================================================
// Effect Container
// =============================================================================

mod side_effect;

pub use side_effect::SideEffect;

// =============================================================================
// Pipeline Results and Step Conversions
// =============================================================================

mod pipe_result;

pub use pipe_result::{IntoPipeResult, IntoStrictPipeResult, PipeResult, Plain};

// =============================================================================
// Pipeline Macros
// =============================================================================

mod pipe_effect_macro;
mod pipe_effect_strict_macro;

#[cfg(feature = "async")]
mod pipe_effect_async_macro;

#[cfg(feature = "async")]
mod pipe_effect_async_strict_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe_effect;
pub use crate::pipe_effect_fn;
pub use crate::pipe_effect_strict;
pub use crate::pipe_effect_strict_fn;

#[cfg(feature = "async")]
pub use crate::pipe_effect_async;
#[cfg(feature = "async")]
pub use crate::pipe_effect_async_fn;
#[cfg(feature = "async")]
pub use crate::pipe_effect_async_strict;
#[cfg(feature = "async")]
pub use crate::pipe_effect_async_strict_fn;

// =============================================================================
// Retry Utilities (requires async feature)
// =============================================================================

#[cfg(feature = "async")]
mod retry;

#[cfg(feature = "async")]
pub use retry::{retry, retry_with_backoff};
