//! Smescore: SME Loan Default Scoring Library
//!
//! A library for turning raw company financial-statement records into a
//! model-ready feature table, and for wrapping a pre-trained classifier
//! into a default / not-default decision with a probability.

pub mod cli;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod utils;
