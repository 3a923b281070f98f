//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("AI response contained no text payload")]
    EmptyResponse,

    #[error("Itinerary payload is not valid JSON: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("Itinerary payload violates schema: {0}")]
    SchemaViolation(String),

    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Invalid consultation lead: {0}")]
    InvalidLead(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
