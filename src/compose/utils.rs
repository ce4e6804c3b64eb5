//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used
//! in functional programming:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//!
//! These functions serve as building blocks for more complex function compositions.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```
/// use fp_pack::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use fp_pack::compose::identity;
/// use fp_pack::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
/// Useful when you need a function that always produces the same result
/// regardless of its input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Arguments
///
/// * `value` - The value that the returned function will always return
///
/// # Returns
///
/// A function that takes any input and returns the constant value.
///
/// # Examples
///
/// ```
/// use fp_pack::compose::constant;
///
/// // Create a function that always returns 5 for i32 input
/// let always_five_from_int = constant::<_, i32>(5);
/// assert_eq!(always_five_from_int(100), 5);
///
/// // Create a function that always returns 5 for &str input
/// let always_five_from_str = constant::<_, &str>(5);
/// assert_eq!(always_five_from_str("ignored"), 5);
/// ```
///
/// # Use with iterators
///
/// ```
/// use fp_pack::compose::constant;
///
/// // Replace all elements with zeros
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
