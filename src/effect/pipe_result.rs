//! Pipeline results - a plain value or a pending side effect.
//!
//! This module provides [`PipeResult<T, E>`], the outcome type of the
//! `pipe_effect!` macro family, along with the conversion traits that let
//! pipeline steps return plain values, [`SideEffect`]s or `PipeResult`s
//! interchangeably.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::{PipeResult, SideEffect};
//!
//! // Creating results
//! let value: PipeResult<i32, String> = PipeResult::Value(42);
//! let pending: PipeResult<i32, String> =
//!     PipeResult::Effect(SideEffect::of(|| "aborted".to_string()));
//!
//! // Discrimination
//! assert!(value.is_value());
//! assert!(pending.is_effect());
//!
//! // Case analysis: exactly one handler runs, and the effect handler
//! // receives the effect without running it.
//! let message = pending.fold(
//!     |n| format!("got {n}"),
//!     |effect| format!("pending ({:?})", effect.label()),
//! );
//! assert_eq!(message, "pending (None)");
//! ```

use std::fmt;

use super::side_effect::SideEffect;

/// The outcome of an effect-aware pipeline: a plain value or a pending effect.
///
/// `PipeResult<T, E>` is a nominal sum type; a value is an effect if and only
/// if it is the [`Effect`](Self::Effect) variant, never because of its shape.
/// By convention:
/// - `Value` carries the payload of a pipeline that ran all its steps
/// - `Effect` carries the untouched [`SideEffect`] produced by the step that
///   short-circuited the pipeline
///
/// # Type Parameters
///
/// * `T` - The type of the plain value
/// * `E` - The type the pending effect produces when run
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{PipeResult, SideEffect};
///
/// let completed: PipeResult<i32, String> = PipeResult::Value(40);
/// assert_eq!(completed.unwrap_value(), 40);
///
/// let aborted: PipeResult<i32, String> =
///     PipeResult::Effect(SideEffect::labeled(|| "denied".to_string(), "age-check"));
/// assert_eq!(aborted.unwrap_effect().label(), Some("age-check"));
/// ```
pub enum PipeResult<T, E> {
    /// A plain value; the pipeline ran every step.
    Value(T),
    /// A pending effect; the pipeline stopped at the step that produced it.
    Effect(SideEffect<E>),
}

impl<T, E> PipeResult<T, E> {
    // =========================================================================
    // Discrimination
    // =========================================================================

    /// Returns `true` if this is a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// assert!(value.is_value());
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::of(|| "stop".to_string()));
    /// assert!(!pending.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this is a pending effect.
    ///
    /// This is the discrimination the pipeline composers use internally; a
    /// result is an effect only by construction, never by structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::of(|| "stop".to_string()));
    /// assert!(pending.is_effect());
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// assert!(!value.is_effect());
    /// ```
    #[inline]
    pub const fn is_effect(&self) -> bool {
        matches!(self, Self::Effect(_))
    }

    // =========================================================================
    // Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<T>`, consuming the result.
    ///
    /// Returns `Some(value)` for `Value`, otherwise `None`. A pending effect
    /// is dropped unrun.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// assert_eq!(value.value(), Some(42));
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::of(|| "stop".to_string()));
    /// assert_eq!(pending.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Effect(_) => None,
        }
    }

    /// Converts into an `Option<SideEffect<E>>`, consuming the result.
    ///
    /// Returns `Some(effect)` for `Effect`, otherwise `None`. The effect is
    /// handed over unrun.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::of(|| "stop".to_string()));
    /// let effect = pending.effect().unwrap();
    /// assert_eq!(effect.run(), "stop");
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// assert!(value.effect().is_none());
    /// ```
    #[inline]
    pub fn effect(self) -> Option<SideEffect<E>> {
        match self {
            Self::Value(_) => None,
            Self::Effect(effect) => Some(effect),
        }
    }

    // =========================================================================
    // Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the plain value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// assert_eq!(value.value_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Effect(_) => None,
        }
    }

    /// Returns a reference to the pending effect if present.
    ///
    /// Only the label is observable through a reference; running requires
    /// ownership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::labeled(|| "stop".to_string(), "guard"));
    /// let label = pending.effect_ref().and_then(|effect| effect.label());
    /// assert_eq!(label, Some("guard"));
    /// ```
    #[inline]
    pub const fn effect_ref(&self) -> Option<&SideEffect<E>> {
        match self {
            Self::Value(_) => None,
            Self::Effect(effect) => Some(effect),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the plain value if present.
    ///
    /// A pending effect passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(21);
    /// assert_eq!(value.map(|n| n * 2).unwrap_value(), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> PipeResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => PipeResult::Value(function(value)),
            Self::Effect(effect) => PipeResult::Effect(effect),
        }
    }

    /// Transforms the payload a pending effect will produce, lazily.
    ///
    /// The function is composed onto the deferred computation via
    /// [`SideEffect::map`]; nothing runs and the label is preserved. A plain
    /// value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let pending: PipeResult<i32, &str> =
    ///     PipeResult::Effect(SideEffect::labeled(|| "denied", "guard"));
    /// let widened: PipeResult<i32, String> = pending.map_effect(String::from);
    ///
    /// let effect = widened.unwrap_effect();
    /// assert_eq!(effect.label(), Some("guard"));
    /// assert_eq!(effect.run(), "denied".to_string());
    /// ```
    #[inline]
    pub fn map_effect<E2, F>(self, function: F) -> PipeResult<T, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E: 'static,
        E2: 'static,
    {
        match self {
            Self::Value(value) => PipeResult::Value(value),
            Self::Effect(effect) => PipeResult::Effect(effect.map(function)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the result by applying exactly one of two handlers.
    ///
    /// `on_value` receives the plain value; `on_effect` receives the pending
    /// [`SideEffect`] without running it. Whether the deferred computation
    /// happens is entirely up to the handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// let shown = value.fold(|n| n.to_string(), |effect| effect.run());
    /// assert_eq!(shown, "42");
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::of(|| "stop".to_string()));
    /// let shown = pending.fold(|n| n.to_string(), |effect| effect.run());
    /// assert_eq!(shown, "stop");
    /// ```
    #[inline]
    pub fn fold<R, FV, FE>(self, on_value: FV, on_effect: FE) -> R
    where
        FV: FnOnce(T) -> R,
        FE: FnOnce(SideEffect<E>) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Effect(effect) => on_effect(effect),
        }
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Resolves the result: returns the plain value unchanged, or runs the
    /// pending effect and returns its (converted) payload.
    ///
    /// This is the sanctioned place to execute a pipeline's leftover effect.
    /// Call it at the boundary, after composition is done; never use it as a
    /// pipeline step. When the effect payload type differs from the value
    /// type beyond an `Into` conversion, use [`fold`](Self::fold) instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let completed: PipeResult<String, &str> = PipeResult::Value("direct".to_string());
    /// assert_eq!(completed.run(), "direct");
    ///
    /// let aborted: PipeResult<String, &str> =
    ///     PipeResult::Effect(SideEffect::of(|| "from effect"));
    /// assert_eq!(aborted.run(), "from effect".to_string());
    /// ```
    #[inline]
    pub fn run(self) -> T
    where
        E: Into<T> + 'static,
    {
        match self {
            Self::Value(value) => value,
            Self::Effect(effect) => effect.run().into(),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the plain value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Effect` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::PipeResult;
    ///
    /// let value: PipeResult<i32, String> = PipeResult::Value(42);
    /// assert_eq!(value.unwrap_value(), 42);
    /// ```
    #[inline]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Effect(_) => panic!("called `PipeResult::unwrap_value()` on an `Effect` value"),
        }
    }

    /// Returns the pending effect, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Value` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let pending: PipeResult<i32, String> =
    ///     PipeResult::Effect(SideEffect::of(|| "stop".to_string()));
    /// assert_eq!(pending.unwrap_effect().run(), "stop");
    /// ```
    #[inline]
    pub fn unwrap_effect(self) -> SideEffect<E> {
        match self {
            Self::Value(_) => panic!("called `PipeResult::unwrap_effect()` on a `Value` value"),
            Self::Effect(effect) => effect,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E> fmt::Debug for PipeResult<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Effect(effect) => formatter.debug_tuple("Effect").field(effect).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<SideEffect<E>> for PipeResult<T, E> {
    /// Injects a pending effect into the result type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::{PipeResult, SideEffect};
    ///
    /// let result: PipeResult<i32, String> =
    ///     SideEffect::of(|| "stop".to_string()).into();
    /// assert!(result.is_effect());
    /// ```
    #[inline]
    fn from(effect: SideEffect<E>) -> Self {
        Self::Effect(effect)
    }
}

// =============================================================================
// IntoPipeResult Trait
// =============================================================================

/// A trait for converting values into [`PipeResult`] for use in the
/// `pipe_effect!` macro family.
///
/// Pipeline inputs and step returns pass through this conversion, so a step
/// can return a plain value, a [`SideEffect`] or a full [`PipeResult`] and
/// the pipeline treats them uniformly.
///
/// # Laws
///
/// ## Identity for `PipeResult`
///
/// A `PipeResult` converts to itself unchanged:
/// ```text
/// result.into_pipe_result() == result
/// ```
///
/// ## Injection for `SideEffect`
///
/// A `SideEffect` becomes a pending-effect result; the effect instance is
/// moved, not rebuilt:
/// ```text
/// effect.into_pipe_result() == PipeResult::Effect(effect)
/// ```
///
/// ## Value wrapping for plain types
///
/// Scalar types and `String` become plain values:
/// ```text
/// value.into_pipe_result() == PipeResult::Value(value)
/// ```
///
/// User-defined types opt in through the [`Plain`] wrapper.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{IntoPipeResult, PipeResult, SideEffect};
///
/// let from_value: PipeResult<i32, String> = 42.into_pipe_result();
/// assert!(from_value.is_value());
///
/// let from_effect: PipeResult<i32, String> =
///     SideEffect::of(|| "stop".to_string()).into_pipe_result();
/// assert!(from_effect.is_effect());
/// ```
pub trait IntoPipeResult<T, E> {
    /// Converts the value into a [`PipeResult`].
    fn into_pipe_result(self) -> PipeResult<T, E>;
}

// PipeResult<T, E> implementation - identity
impl<T, E> IntoPipeResult<T, E> for PipeResult<T, E> {
    #[inline]
    fn into_pipe_result(self) -> Self {
        self
    }
}

// SideEffect<E> implementation - injection into the effect side
impl<T, E> IntoPipeResult<T, E> for SideEffect<E> {
    #[inline]
    fn into_pipe_result(self) -> PipeResult<T, E> {
        PipeResult::Effect(self)
    }
}

// =============================================================================
// IntoStrictPipeResult Trait
// =============================================================================

/// A trait for converting values into [`PipeResult`] while widening effect
/// payloads into a pipeline-level union type.
///
/// The strict pipeline variants (`pipe_effect_strict!` and friends) route
/// inputs and step returns through this conversion instead of
/// [`IntoPipeResult`]. Steps may produce effects with different payload
/// types; each payload is lifted into the caller-named union type `E` via
/// [`Into`], lazily, so the pipeline's result type names exactly the set of
/// effects it can produce.
///
/// The lift composes onto the deferred computation with [`SideEffect::map`]:
/// nothing runs and the label is preserved.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{IntoStrictPipeResult, PipeResult, SideEffect};
///
/// #[derive(Debug, PartialEq)]
/// enum GuardEffect {
///     Age(String),
///     Range(i32),
/// }
///
/// impl From<String> for GuardEffect {
///     fn from(message: String) -> Self {
///         Self::Age(message)
///     }
/// }
///
/// impl From<i32> for GuardEffect {
///     fn from(bound: i32) -> Self {
///         Self::Range(bound)
///     }
/// }
///
/// let narrow: PipeResult<i32, String> =
///     PipeResult::Effect(SideEffect::of(|| "denied".to_string()));
/// let wide: PipeResult<i32, GuardEffect> = narrow.into_strict_pipe_result();
/// assert_eq!(
///     wide.unwrap_effect().run(),
///     GuardEffect::Age("denied".to_string()),
/// );
/// ```
pub trait IntoStrictPipeResult<T, E> {
    /// Converts the value into a [`PipeResult`], widening any effect payload
    /// into the union type `E`.
    fn into_strict_pipe_result(self) -> PipeResult<T, E>;
}

// PipeResult<T, E2> implementation - lazy widening of the effect payload
impl<T, E, E2> IntoStrictPipeResult<T, E> for PipeResult<T, E2>
where
    E2: Into<E> + 'static,
    E: 'static,
{
    #[inline]
    fn into_strict_pipe_result(self) -> PipeResult<T, E> {
        self.map_effect(Into::into)
    }
}

// SideEffect<E2> implementation - injection plus lazy widening
impl<T, E, E2> IntoStrictPipeResult<T, E> for SideEffect<E2>
where
    E2: Into<E> + 'static,
    E: 'static,
{
    #[inline]
    fn into_strict_pipe_result(self) -> PipeResult<T, E> {
        PipeResult::Effect(self.map(Into::into))
    }
}

// =============================================================================
// Plain Type Conversions
// =============================================================================

// Primitive type implementations using macro
macro_rules! impl_into_pipe_result_for_plain_types {
    ($($type:ty),* $(,)?) => {
        $(
            impl<E> IntoPipeResult<$type, E> for $type {
                #[inline]
                fn into_pipe_result(self) -> PipeResult<$type, E> {
                    PipeResult::Value(self)
                }
            }

            impl<E> IntoStrictPipeResult<$type, E> for $type {
                #[inline]
                fn into_strict_pipe_result(self) -> PipeResult<$type, E> {
                    PipeResult::Value(self)
                }
            }
        )*
    };
}

impl_into_pipe_result_for_plain_types!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    (),
    String,
    &'static str,
);

// =============================================================================
// Plain<T> Wrapper Type
// =============================================================================

/// A wrapper marking a user-defined type as a plain value in pipelines.
///
/// `Plain<T>` wraps any type to make it convertible to a [`PipeResult`]
/// value via [`IntoPipeResult`] and [`IntoStrictPipeResult`]. This is useful
/// for step returns and pipeline inputs of types that do not have the
/// conversion implemented directly.
///
/// # Examples
///
/// ```rust
/// use fp_pack::effect::{PipeResult, Plain};
/// use fp_pack::pipe_effect;
///
/// #[derive(Debug, PartialEq)]
/// struct Account {
///     balance: i64,
/// }
///
/// let result: PipeResult<i64, String> = pipe_effect!(
///     Plain(Account { balance: 120 }),
///     |account: Account| account.balance * 2,
/// );
/// assert_eq!(result.unwrap_value(), 240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plain<T>(pub T);

impl<T> Plain<T> {
    /// Creates a new `Plain` wrapper around the given value.
    ///
    /// This is equivalent to `Plain(value)`.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwraps and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, E> IntoPipeResult<T, E> for Plain<T> {
    #[inline]
    fn into_pipe_result(self) -> PipeResult<T, E> {
        PipeResult::Value(self.0)
    }
}

impl<T, E> IntoStrictPipeResult<T, E> for Plain<T> {
    #[inline]
    fn into_strict_pipe_result(self) -> PipeResult<T, E> {
        PipeResult::Value(self.0)
    }
}
