//! The `SideEffect` container - a deferred computation with a label.
//!
//! A [`SideEffect`] wraps a computation without executing it. Construction,
//! labeling and passing the value around are all free of side effects;
//! execution happens only when the owner explicitly calls [`SideEffect::run`].
//!
//! # Design Philosophy
//!
//! A `SideEffect` "describes" work without "performing" it. Pipelines treat
//! the container as an opaque abort signal: they move it to the caller
//! unopened, and the caller decides at the pipeline boundary whether the
//! deferred work should happen at all.
//!
//! # Examples
//!
//! ```rust
//! use fp_pack::effect::SideEffect;
//!
//! let effect = SideEffect::of(|| 21 * 2);
//! assert_eq!(effect.run(), 42);
//! ```
//!
//! # Deferral
//!
//! ```rust
//! use fp_pack::effect::SideEffect;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let effect = SideEffect::of(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Execute the effect
//! let result = effect.run();
//! assert!(executed.load(Ordering::SeqCst));
//! assert_eq!(result, 42);
//! ```

use std::borrow::Cow;
use std::fmt;

/// A deferred computation with an optional diagnostic label.
///
/// `SideEffect<E>` wraps a thunk producing a value of type `E`. The thunk is
/// heap-allocated, exclusively owned and never invoked by the library;
/// [`run`](Self::run) consumes the container, so the thunk can execute at
/// most once.
///
/// # Type Parameters
///
/// - `E`: The type of the value produced when the effect is run.
///
/// # Guarantees
///
/// 1. **No auto-execution**: no constructor or combinator invokes the thunk.
/// 2. **At most once**: `run` takes `self` and the thunk is `FnOnce`; a
///    second `run` on the same effect does not compile.
/// 3. **Label transparency**: the label is diagnostic only and has no effect
///    on execution.
///
/// ```compile_fail
/// use fp_pack::effect::SideEffect;
///
/// let effect = SideEffect::of(|| 1);
/// effect.run();
/// effect.run(); // error: use of moved value
/// ```
pub struct SideEffect<E> {
    /// The wrapped computation. Boxed so the container has a fixed size and
    /// sole ownership of the closure and its captures.
    thunk: Box<dyn FnOnce() -> E + Send>,
    /// Diagnostic label, carried untouched through pipelines.
    label: Option<Cow<'static, str>>,
}

impl<E: 'static> SideEffect<E> {
    /// Creates a side effect from a thunk, without a label.
    ///
    /// The thunk will not be executed until [`run`](Self::run) is called.
    ///
    /// # Arguments
    ///
    /// * `thunk` - A closure producing a value of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::of(|| {
    ///     println!("running the fallback");
    ///     "fallback".to_string()
    /// });
    /// // Nothing is printed yet
    /// let result = effect.run();
    /// // Now "running the fallback" is printed
    /// assert_eq!(result, "fallback");
    /// ```
    pub fn of<F>(thunk: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
    {
        Self {
            thunk: Box::new(thunk),
            label: None,
        }
    }

    /// Creates a side effect from a thunk and a diagnostic label.
    ///
    /// The label identifies where the effect came from when a pipeline
    /// result is inspected; it never influences execution.
    ///
    /// # Arguments
    ///
    /// * `thunk` - A closure producing a value of type `E`.
    /// * `label` - A diagnostic name for this effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::labeled(|| "ERR: age".to_string(), "age-check");
    /// assert_eq!(effect.label(), Some("age-check"));
    /// ```
    pub fn labeled<F, L>(thunk: F, label: L) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
        L: Into<Cow<'static, str>>,
    {
        Self {
            thunk: Box::new(thunk),
            label: Some(label.into()),
        }
    }

    /// Wraps an already-computed value in a side effect.
    ///
    /// Running the effect returns the value unchanged. Useful in tests and
    /// as a degenerate abort signal that carries its payload directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::pure(42);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn pure(value: E) -> Self
    where
        E: Send,
    {
        Self::of(move || value)
    }

    /// Executes the deferred computation and returns its result.
    ///
    /// This is the only way the thunk ever runs. It consumes the effect, so
    /// the computation happens at most once; attempting to run the same
    /// effect twice is a compile error.
    ///
    /// Call this at the pipeline boundary, never inside a pipeline step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::of(|| 21 * 2);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn run(self) -> E {
        (self.thunk)()
    }

    /// Returns the diagnostic label, if one was attached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let plain = SideEffect::of(|| 1);
    /// assert_eq!(plain.label(), None);
    ///
    /// let named = SideEffect::labeled(|| 1, "boundary");
    /// assert_eq!(named.label(), Some("boundary"));
    /// ```
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Attaches or replaces the diagnostic label.
    ///
    /// The deferred computation is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::of(|| 1).with_label("late-name");
    /// assert_eq!(effect.label(), Some("late-name"));
    /// ```
    pub fn with_label<L>(self, label: L) -> Self
    where
        L: Into<Cow<'static, str>>,
    {
        Self {
            thunk: self.thunk,
            label: Some(label.into()),
        }
    }

    /// Transforms the value the effect will produce, lazily.
    ///
    /// The function is composed onto the thunk; nothing runs until
    /// [`run`](Self::run) is called. The label is preserved. This is what
    /// the strict pipeline variants use to widen effect payloads into a
    /// union type.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the eventual result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_pack::effect::SideEffect;
    ///
    /// let effect = SideEffect::labeled(|| 21, "half").map(|n| n * 2);
    /// assert_eq!(effect.label(), Some("half"));
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> SideEffect<B>
    where
        F: FnOnce(E) -> B + Send + 'static,
        B: 'static,
    {
        let Self { thunk, label } = self;
        SideEffect {
            thunk: Box::new(move || function(thunk())),
            label,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<E> fmt::Debug for SideEffect<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The thunk is opaque; only the label is observable without running.
        match &self.label {
            Some(label) => formatter
                .debug_tuple("SideEffect")
                .field(&format_args!("<deferred>"))
                .field(label)
                .finish(),
            None => formatter
                .debug_tuple("SideEffect")
                .field(&format_args!("<deferred>"))
                .finish(),
        }
    }
}

// Static assertions: the container moves across task boundaries but cannot
// be duplicated, so a deferred computation has exactly one owner.
static_assertions::assert_impl_all!(SideEffect<String>: Send);
static_assertions::assert_not_impl_any!(SideEffect<String>: Clone, Copy);
