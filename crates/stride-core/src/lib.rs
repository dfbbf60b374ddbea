//! stride-core
//!
//! Pure domain types, error taxonomy, and object key conventions.
//! No AWS SDK dependency; this is the shared vocabulary of the Stride system.

pub mod error;
pub mod keys;
pub mod models;
