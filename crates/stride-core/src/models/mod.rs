pub mod analysis;
pub mod metric;
pub mod profile;
pub mod score;
pub mod summary;
pub mod trend;
