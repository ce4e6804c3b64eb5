//! Retry utilities for flaky async steps.
//!
//! Pipelines short-circuit on the first effect, so a transient failure
//! inside an async step would otherwise abort the whole chain. Wrapping the
//! operation in [`retry`] or [`retry_with_backoff`] lets the step absorb
//! transient errors and only surface a [`SideEffect`](crate::effect::SideEffect)
//! once the error is final.

use std::future::Future;
use std::time::Duration;

/// Retries a fallible async operation up to `max_attempts` times.
///
/// The factory is called once per attempt so that each attempt gets a fresh
/// future. The first `Ok` returns immediately; once every attempt has
/// failed, the last error is returned.
///
/// # Arguments
///
/// * `factory` - Creates the future for each attempt
/// * `max_attempts` - Maximum number of attempts; `0` is treated as `1`
///
/// # Behavior
///
/// - If the operation succeeds, returns immediately without retry
/// - If it fails, retries up to `max_attempts` times in total
/// - If all attempts fail, returns the last error
/// - If `max_attempts` is 0, executes exactly once (no retry)
///
/// # Examples
///
/// ```rust,ignore
/// use fp_pack::effect::retry;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[tokio::main]
/// async fn main() {
///     let counter = Arc::new(AtomicUsize::new(0));
///     let counter_clone = counter.clone();
///
///     let result = retry(
///         move || {
///             let counter = counter_clone.clone();
///             async move {
///                 if counter.fetch_add(1, Ordering::SeqCst) < 2 {
///                     Err("transient")
///                 } else {
///                     Ok(42)
///                 }
///             }
///         },
///         5,
///     )
///     .await;
///
///     assert_eq!(result, Ok(42));
///     assert_eq!(counter.load(Ordering::SeqCst), 3);
/// }
/// ```
#[allow(clippy::missing_panics_doc)]
pub async fn retry<A, E, F, Fut>(factory: F, max_attempts: usize) -> Result<A, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<A, E>>,
{
    let effective_attempts = max_attempts.max(1);
    let mut last_error: Option<E> = None;

    for _ in 0..effective_attempts {
        match factory().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                last_error = Some(error);
            }
        }
    }

    Err(last_error.expect("the loop runs at least once"))
}

/// Retries a fallible async operation with exponential backoff.
///
/// Before each retry (i.e., before attempts `2..=max_attempts`), the delay
/// is `initial_delay * 2^(attempt - 1)`, where `attempt` is the 1-based
/// attempt number.
///
/// # Arguments
///
/// * `factory` - Creates the future for each attempt
/// * `max_attempts` - Maximum number of attempts; `0` is treated as `1`
/// * `initial_delay` - Delay before the second attempt
///
/// # Behavior
///
/// - First attempt: no delay
/// - Second attempt: `initial_delay`
/// - Third attempt: `initial_delay * 2`
/// - Fourth attempt: `initial_delay * 4`
/// - And so on, saturating instead of overflowing
///
/// # Examples
///
/// ```rust,ignore
/// use fp_pack::effect::retry_with_backoff;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let result: Result<i32, &str> = retry_with_backoff(
///         || async { Err("down") },
///         3,
///         Duration::from_millis(100),
///     )
///     .await;
///
///     // Delays: 100ms before 2nd attempt, 200ms before 3rd attempt.
///     assert_eq!(result, Err("down"));
/// }
/// ```
#[allow(clippy::missing_panics_doc)]
pub async fn retry_with_backoff<A, E, F, Fut>(
    factory: F,
    max_attempts: usize,
    initial_delay: Duration,
) -> Result<A, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<A, E>>,
{
    let effective_attempts = max_attempts.max(1);
    let mut last_error: Option<E> = None;

    for attempt in 0..effective_attempts {
        // No delay ahead of the first attempt; retries wait initial * 2^(n-1).
        if attempt > 0 {
            let exponent = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
            let delay_multiplier = 2u32.saturating_pow(exponent);
            let delay = initial_delay.saturating_mul(delay_multiplier);
            tokio::time::sleep(delay).await;
        }

        match factory().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                last_error = Some(error);
            }
        }
    }

    Err(last_error.expect("the loop runs at least once"))
}
