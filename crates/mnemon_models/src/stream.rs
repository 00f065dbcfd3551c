//! Stream aggregation for streaming attempts.

use futures_util::StreamExt;
use mnemon_error::BackendError;
use mnemon_interface::TextStream;

/// Collects one attempt's fragments into a single logical text.
///
/// Fragments are concatenated in delivery order; empty fragments are
/// skipped. Each non-empty fragment is passed to `observer` as it
/// arrives, before aggregation completes. A failed fragment aborts the
/// whole attempt: the partial text is discarded and the error propagates
/// to the retry loop.
pub async fn collect_stream(
    mut stream: TextStream,
    observer: Option<&(dyn Fn(&str) + Send + Sync)>,
) -> Result<String, BackendError> {
    let mut aggregated = String::new();

    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;
        if fragment.is_empty() {
            continue;
        }
        if let Some(observe) = observer {
            observe(&fragment);
        }
        aggregated.push_str(&fragment);
    }

    Ok(aggregated)
}
