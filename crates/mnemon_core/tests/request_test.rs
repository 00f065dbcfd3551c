//! Tests for request and configuration types.

use mnemon_core::{BackendConfig, ChatMessage, ChatRequest, DEFAULT_BASE_URL, Role};

#[test]
fn request_builder_applies_defaults() {
    let request = ChatRequest::builder()
        .messages(vec![ChatMessage::user("hi")])
        .build()
        .expect("should build");

    assert_eq!(*request.temperature(), 0.2);
    assert_eq!(*request.max_retries(), 3);
    assert!(request.response_format().is_none());
}

#[test]
fn request_requires_messages() {
    assert!(ChatRequest::builder().build().is_err());
}

#[test]
fn message_shorthands_set_roles() {
    assert_eq!(ChatMessage::system("s").role, Role::System);
    assert_eq!(ChatMessage::user("u").role, Role::User);
    assert_eq!(ChatMessage::assistant("a").role, Role::Assistant);
}

#[test]
fn endpoint_falls_back_to_default() {
    let config = BackendConfig::builder()
        .api_key("k")
        .build()
        .expect("should build");
    assert_eq!(config.endpoint(), DEFAULT_BASE_URL);

    let config = BackendConfig::builder()
        .api_key("k")
        .base_url(Some("http://localhost:8080/v1".to_string()))
        .build()
        .expect("should build");
    assert_eq!(config.endpoint(), "http://localhost:8080/v1");
}
