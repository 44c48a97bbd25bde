//! Report module - pipeline run summaries

pub mod summary;

pub use summary::*;
