#![forbid(unsafe_code)]
//! skillet-core: recipe corpus model, ingredient parsing, and ingestion.
//!
//! # Conventions
//!
//! - **Errors**: `anyhow::Result` with `.context(...)` at fallible seams;
//!   stable machine-readable codes live in [`error`].
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod parse;

pub use config::AnalysisConfig;
pub use model::RecipeRecord;
