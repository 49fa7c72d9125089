//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`handle`]: Raw sequential access to an open text resource
//! - [`content`]: Whole-content reads for the analyzer
//! - [`reporter`]: Scope lifecycle reporting (the injected logger)
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod content;
pub mod handle;
pub mod reporter;

pub use content::ContentSource;
pub use handle::TextHandle;
pub use reporter::ScopeReporter;
