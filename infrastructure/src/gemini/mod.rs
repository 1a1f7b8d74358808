//! Gemini adapter
//!
//! Implements [`StructuredGenerator`](mcq_application::StructuredGenerator)
//! over `POST /v1beta/models/{model}:generateContent` with
//! `responseMimeType: application/json` and a `responseSchema`.

pub mod error;
pub mod generator;
pub mod types;
