//! tenderdiff Domain Layer
//!
//! Core data model shared by every other crate. It has ZERO external
//! dependencies and defines the value types and trait interfaces that the
//! infrastructure layers implement.
//!
//! ## Key Concepts
//!
//! - **DocumentFormat**: The declared format of an upload (never sniffed)
//! - **RawDocument / ExtractedDocument**: A document before and after text extraction
//! - **ModelResponse**: Generated text, or an explicit unavailable marker
//! - **AnalysisResult**: Two summaries and a comparison from one run
//! - **LlmProvider**: The boundary to the text-generation service

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod format;
pub mod response;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use document::{ExtractedDocument, RawDocument};
pub use format::DocumentFormat;
pub use response::{AnalysisResult, ModelResponse, INFERENCE_UNAVAILABLE};
pub use text::truncate_chars;
pub use traits::LlmProvider;
