//! The template -> lookup keys -> values -> env file pipeline
//!
//! Each stage consumes the previous stage's mapping and produces a new one.
//! Every stage fails fast; the output file is only touched once all values
//! have been fetched.

use crate::secrets::{ParameterStore, SecretManager};
use ssmenv_config::{Config, TemplateLoader};
use ssmenv_core::{LookupKeys, Result};
use ssmenv_env::{parse_parameters, substitute_variables, EnvWriter};
use std::future::Future;
use std::path::PathBuf;

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--dry-run`: lookup keys were computed, nothing was fetched or written
    DryRun(LookupKeys),
    /// The env file was written
    Written { path: PathBuf, variables: usize },
}

/// Load the template and substitute parameters into it.
///
/// Touches only the local file system.
pub fn lookup_keys(config: &Config) -> Result<LookupKeys> {
    let template = TemplateLoader::new().load(&config.parameters_file)?;
    let parameters = parse_parameters(&config.parameters)?;
    substitute_variables(&template, &parameters)
}

/// Fetch every lookup key and write the env file
pub async fn resolve_and_write(
    config: &Config,
    keys: &LookupKeys,
    store: Box<dyn ParameterStore>,
) -> Result<Outcome> {
    let manager =
        SecretManager::new(store).with_max_concurrent(config.runtime_settings.max_concurrent);
    let values = manager.resolve(keys).await?;

    EnvWriter::new().write(&values, &config.output_file)?;

    Ok(Outcome::Written {
        path: config.output_file.clone(),
        variables: values.len(),
    })
}

/// Run the whole pipeline.
///
/// `connect` is only called once substitution has succeeded and the run is
/// not a dry run, so input errors never reach the parameter store.
pub async fn run<F, Fut>(config: &Config, connect: F) -> Result<Outcome>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Box<dyn ParameterStore>>,
{
    let keys = lookup_keys(config)?;
    if config.runtime_settings.dry_run {
        return Ok(Outcome::DryRun(keys));
    }
    let store = connect().await;
    resolve_and_write(config, &keys, store).await
}
