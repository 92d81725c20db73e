use anyhow::Error;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Retries an async quote request a fixed number of times.
///
/// Runs `operation` up to `1 + retries` times, sleeping `delay` between
/// attempts, and returns the first success or the last error.
pub async fn with_retry<F, Fut, T>(
    mut operation: F,
    retries: usize,
    delay: Duration,
) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, reqwest::Error>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(err) => {
                attempt += 1;
                if attempt > retries {
                    return Err(err.into());
                }
                debug!("Request attempt {attempt} failed: {err}. Retrying...");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
