//! Core data types for the Mnemon LLM resilience library.
//!
//! This crate provides the request and configuration types shared across
//! all Mnemon backends.

mod config;
mod message;
mod request;
mod role;

pub use config::{BackendConfig, BackendConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use message::ChatMessage;
pub use request::{ChatRequest, ChatRequestBuilder, ResponseFormat};
pub use role::Role;
