//! Command-line front end for ssmenv
//!
//! Reads a template of output variable names to SSM parameter names,
//! substitutes `${name}` placeholders from the command line, fetches every
//! parameter and writes the values as a `NAME=VALUE` env file.

pub mod cli;
pub mod pipeline;
pub mod secrets;

pub use cli::Cli;
pub use pipeline::{lookup_keys, resolve_and_write, run, Outcome};
pub use secrets::{ParameterStore, SecretManager, SsmParameterStore};
