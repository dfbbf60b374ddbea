//! stride-service
//!
//! Orchestration of the analysis engine over its collaborators: profile and
//! record sources, the report cache, and the optional narrator.

pub mod config;
pub mod error;
pub mod service;
