//! stride-storage
//!
//! Persistence collaborators (profiles, daily records, cached analyses) and
//! the freshness-windowed report cache. S3-backed and in-memory stores share
//! the traits in [`store`].

pub mod cache;
pub mod client;
pub mod error;
pub mod json;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;
