//! Persistence for run artifacts.
//!
//! JSON for human-inspectable outputs (metrics, reports), the versioned
//! binary format for everything that only the pipeline itself reads back
//! (preprocessors, model parameters).

pub mod binary;
pub mod json;

pub use binary::{load_bin, save_bin};
pub use json::{load_json, load_json_as, save_json};
