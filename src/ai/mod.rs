//! Generative AI boundary
//!
//! Two request shapes go to the model: a schema-constrained extraction that
//! turns a free-text entry into structured fields ([`interpreter`]), and a
//! free-text narrative over recent records ([`report`]). Both go through the
//! [`GenerativeModel`] trait; [`gemini::GeminiClient`] is the real service.
//!
//! The two callers deliberately handle failure differently: interpretation
//! fails fast, the report degrades to a fixed fallback string.

pub mod gemini;
pub mod interpreter;
pub mod report;

pub use gemini::GeminiClient;
pub use interpreter::interpret;
pub use report::{generate_report, REPORT_EMPTY, REPORT_FALLBACK};

use serde_json::Value;

use crate::error::ScribeResult;

/// One prompt sent to the model
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Instructions and data, as a single user turn
    pub prompt: String,
    /// When set, the reply must be JSON matching this schema
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    /// A free-text request
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    /// A request whose reply is constrained to `schema`
    pub fn structured(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// Something that can answer a prompt
pub trait GenerativeModel: Send + Sync {
    /// Send the request and return the reply text
    ///
    /// `Ok(None)` means the service answered but produced no text.
    fn generate(&self, request: &GenerationRequest) -> ScribeResult<Option<String>>;
}
