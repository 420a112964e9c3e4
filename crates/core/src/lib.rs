//! Core domain types, errors, and constants for `ssmenv`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias covering every failure
//!   mode of the pipeline, plus the exit status each one maps to.
//! - **`types`**: order-preserving mapping newtypes for each pipeline stage
//!   (`TemplateMapping`, `SubstitutionParameters`, `LookupKeys`,
//!   `EnvironmentVariables`).
//! - **`constants`**: default file names, region and environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, EXIT_INPUT_ERROR, EXIT_IO_ERROR, EXIT_STORE_ERROR},
    types::*,
};
