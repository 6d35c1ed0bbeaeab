#![forbid(unsafe_code)]

//! Core domain model and calculations for the Stride workout tracker.
//!
//! This crate provides:
//! - Domain types (activity kinds, workout records, packages)
//! - Activity calculators (distance, mean speed, calories)
//! - Summary messages and their text templates
//! - The activity registry that dispatches tracker codes
//! - The package runner

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod summary;
pub mod training;
pub mod registry;
pub mod runner;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use summary::{InfoMessage, MessageLanguage};
pub use training::{Running, Swimming, Training, Walking, Workout};
pub use registry::{get_default_registry, read_package, ActivitySpec, Registry};
pub use runner::{default_packages, run, ErrorPolicy, OutputFormat, RunOptions, RunReport};
