use std::fmt::Display;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Retry an async operation on a fixed backoff schedule.
///
/// Runs the operation once per entry in `delays_secs` plus one final
/// attempt, sleeping the given number of seconds after each failure.
/// The last attempt's error is returned when everything fails.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, delays_secs: &[u64]) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Display,
{
    let total = delays_secs.len() + 1;

    for (i, delay_secs) in delays_secs.iter().enumerate() {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                warn!(
                    "Request failed (attempt {}/{total}): {e}. Retrying after {delay_secs}s...",
                    i + 1
                );
                sleep(Duration::from_secs(*delay_secs)).await;
            }
        }
    }

    operation().await
}
