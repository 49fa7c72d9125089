#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;

pub use config::ScopeConfig;
pub use model::AnalysisResult;
