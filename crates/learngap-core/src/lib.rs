//! learngap-core: Assessment scoring, content conversion, and data model.
//!
//! This crate defines the data model and the deterministic analysis logic
//! that the server and CLI build on. Nothing here performs I/O except
//! [`report::AssessmentReport`] persistence.

pub mod converter;
pub mod error;
pub mod model;
pub mod questionnaire;
pub mod report;
pub mod scorer;
pub mod text_analysis;
pub mod traits;
