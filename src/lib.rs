// src/lib.rs
pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

// Re-export the types a host embedding the library touches most.
pub use calendar::{Clock, FixedClock, SystemClock};
pub use cli::{run, Args};
pub use config::Config;
pub use crate::core::output::OutputPolicy;
pub use crate::core::walker::{process, WalkOptions};
pub use models::{
    DateRange, FileFailure, FilenameField, FilenameFields, OutputLocation, RunSummary, Structure,
};
