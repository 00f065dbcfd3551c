//! Server-sent event parsing for streaming completions.

use crate::openai_compat::StreamChunk;
use async_stream::try_stream;
use futures_util::{Stream, StreamExt};
use mnemon_error::{BackendError, BackendErrorKind};
use mnemon_interface::TextStream;

/// One meaningful line of an SSE body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// A `data:` line carrying a JSON chunk payload.
    Data(String),
    /// The `data: [DONE]` terminator.
    Done,
}

/// Parses a single SSE line, ignoring blanks and comment/field lines.
pub fn parse_sse_line(line: &str) -> Option<SseLine> {
    let payload = line.trim().strip_prefix("data:")?.trim_start();
    if payload == "[DONE]" {
        Some(SseLine::Done)
    } else if payload.is_empty() {
        None
    } else {
        Some(SseLine::Data(payload.to_string()))
    }
}

/// Turns a streaming HTTP response body into a stream of text fragments.
pub(crate) fn chunk_stream(response: reqwest::Response) -> TextStream {
    decode_stream(response.bytes_stream())
}

/// Decodes a stream of SSE body byte chunks into text fragments.
///
/// Raw bytes are buffered and reassembled into lines before any UTF-8
/// decoding happens, so a multi-byte character whose bytes straddle a
/// transport chunk boundary survives intact. Each `data:` line is decoded
/// as a [`StreamChunk`] and the chunk's delta content is yielded in
/// delivery order. The stream ends at `[DONE]` or body exhaustion;
/// transport and decode failures surface as `Err` items.
pub fn decode_stream<S, B, E>(bytes: S) -> TextStream
where
    S: Stream<Item = Result<B, E>> + Send + Unpin + 'static,
    B: AsRef<[u8]> + Send,
    E: std::fmt::Display + Send,
{
    let stream = try_stream! {
        let mut bytes = bytes;
        let mut buffer: Vec<u8> = Vec::new();
        let mut done = false;

        while !done {
            let Some(chunk) = bytes.next().await else {
                break;
            };
            let chunk = chunk.map_err(|e| {
                BackendError::new(BackendErrorKind::Stream(format!(
                    "SSE transport failed: {}",
                    e
                )))
            })?;
            buffer.extend_from_slice(chunk.as_ref());

            while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line);
                match parse_sse_line(&line) {
                    Some(SseLine::Done) => {
                        done = true;
                        break;
                    }
                    Some(SseLine::Data(payload)) => {
                        let decoded: StreamChunk =
                            serde_json::from_str(&payload).map_err(|e| {
                                BackendError::new(BackendErrorKind::ResponseParsing(format!(
                                    "Malformed stream chunk: {}",
                                    e
                                )))
                            })?;
                        if let Some(content) = decoded.content() {
                            yield content.to_string();
                        }
                    }
                    None => {}
                }
            }
        }
    };
    Box::pin(stream)
}
