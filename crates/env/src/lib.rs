//! Template substitution and env file output for ssmenv
//!
//! Turns `name=value` tokens into substitution parameters, expands
//! `${identifier}` placeholders in a template mapping into lookup keys, and
//! writes resolved values as a `NAME=VALUE` env file.

pub mod parameters;
pub mod substitute;
pub mod writer;

pub use parameters::parse_parameters;
pub use substitute::{placeholders, substitute, substitute_variables, MissingVariable, Placeholder};
pub use writer::EnvWriter;
