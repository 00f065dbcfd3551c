//! OpenAI-compatible backend client and retry executor for Mnemon.
//!
//! The [`openai_compat`] module speaks the chat-completions and embeddings
//! wire formats over HTTP; [`ChatExecutor`] wraps any [`mnemon_interface::ChatDriver`]
//! in a deterministic retry loop, delegating streaming attempts to
//! [`collect_stream`].

pub mod openai_compat;

mod executor;
mod stream;

pub use executor::{ChatExecutor, FragmentObserver, backoff_delay};
pub use openai_compat::OpenAiCompatClient;
pub use stream::collect_stream;
