//! stride-narrative
//!
//! Optional free-text enrichment of clinical summaries via Bedrock.

pub mod bedrock;
pub mod error;
pub mod narrator;
pub mod prompt;
