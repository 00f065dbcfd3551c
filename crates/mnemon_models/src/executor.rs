//! Retry executor for generation requests.

use crate::stream::collect_stream;
use mnemon_core::ChatRequest;
use mnemon_error::BackendError;
use mnemon_interface::ChatDriver;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Callback invoked with each streaming fragment as it arrives.
pub type FragmentObserver = Box<dyn Fn(&str) + Send + Sync>;

/// Wait duration before retrying after attempt `attempt` (0-indexed).
///
/// The sequence is exactly 1 s, 2 s, 4 s, ... so tests can assert it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// assert_eq!(mnemon_models::backoff_delay(0), Duration::from_secs(1));
/// assert_eq!(mnemon_models::backoff_delay(2), Duration::from_secs(4));
/// ```
pub fn backoff_delay(attempt: usize) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt.min(32) as u32))
}

/// Executes generation requests against a driver with retry and backoff.
///
/// Attempts are strictly sequential; a failed attempt waits
/// [`backoff_delay`] before the next one, up to the request's retry
/// budget, then the last error propagates. In streaming mode each
/// attempt starts a fresh aggregation, so no partial content leaks
/// across retries.
pub struct ChatExecutor<D> {
    driver: D,
    streaming: bool,
    observer: Option<FragmentObserver>,
}

impl<D: ChatDriver> ChatExecutor<D> {
    /// Creates an executor that requests complete payloads.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            streaming: false,
            observer: None,
        }
    }

    /// Enables or disables streaming delivery.
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Sets a callback that sees each streaming fragment as it arrives.
    pub fn with_observer(mut self, observer: FragmentObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Returns the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Whether responses are delivered as incremental fragments.
    pub fn streaming(&self) -> bool {
        self.streaming
    }

    /// Executes one logical request, returning the complete response text.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's [`BackendError`] after the retry budget
    /// is exhausted.
    #[instrument(skip(self, request), fields(streaming = self.streaming))]
    pub async fn execute(&self, request: &ChatRequest) -> Result<String, BackendError> {
        let max_retries = (*request.max_retries()).max(1);
        let mut attempt = 0;

        loop {
            debug!(attempt, max_retries, "Executing generation attempt");

            match self.attempt(request).await {
                Ok(text) => {
                    if attempt > 0 {
                        debug!(attempt, "Generation succeeded after retry");
                    }
                    return Ok(text);
                }
                Err(err) => {
                    attempt += 1;
                    if attempt >= max_retries {
                        warn!(attempt, error = %err, "All retry attempts exhausted");
                        return Err(err);
                    }

                    let delay = backoff_delay(attempt - 1);
                    warn!(
                        attempt,
                        delay_secs = delay.as_secs(),
                        error = %err,
                        "Generation attempt failed, backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }

    async fn attempt(&self, request: &ChatRequest) -> Result<String, BackendError> {
        if self.streaming {
            let stream = self.driver.complete_stream(request).await?;
            collect_stream(stream, self.observer.as_deref()).await
        } else {
            self.driver.complete(request).await
        }
    }
}
