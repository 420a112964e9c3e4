//! Centralized run configuration for ssmenv
//!
//! `Config` is built once at startup from command-line flags and passed by
//! reference into the pipeline. It is immutable after construction.

use ssmenv_core::{Error, Result, DEFAULT_OUTPUT_FILE, DEFAULT_PARAMETERS_FILE, DEFAULT_REGION};
use std::path::{Path, PathBuf};

/// Immutable configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Template mapping file, absolute
    pub parameters_file: PathBuf,

    /// Destination env file, absolute
    pub output_file: PathBuf,

    /// Raw `name=value` substitution tokens, in command-line order
    pub parameters: Vec<String>,

    /// Settings for the parameter store stage
    pub runtime_settings: RuntimeSettings,
}

/// Settings that affect how parameters are fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Region the parameter store client targets
    pub region: String,

    /// Ask the store to decrypt SecureString parameters
    pub with_decryption: bool,

    /// Upper bound on in-flight fetches; `None` fetches everything at once
    pub max_concurrent: Option<usize>,

    /// Stop after substitution and print the lookup keys
    pub dry_run: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            with_decryption: false,
            max_concurrent: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Start building a configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    parameters_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    parameters: Vec<String>,
    runtime: RuntimeSettings,
}

impl ConfigBuilder {
    /// Create a new builder with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory relative paths are resolved against (defaults to the current directory)
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set the template mapping file
    pub fn parameters_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.parameters_file = Some(path.into());
        self
    }

    /// Set the env file destination
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Set the raw `name=value` substitution tokens
    pub fn parameters(mut self, parameters: Vec<String>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the parameter store region
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.runtime.region = region.into();
        self
    }

    /// Request decryption of SecureString parameters
    pub fn with_decryption(mut self, enabled: bool) -> Self {
        self.runtime.with_decryption = enabled;
        self
    }

    /// Bound the number of concurrent fetches
    pub fn max_concurrent(mut self, limit: Option<usize>) -> Self {
        self.runtime.max_concurrent = limit;
        self
    }

    /// Stop after substitution
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.runtime.dry_run = enabled;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<Config> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir()
                .map_err(|e| Error::file_system(".", "get current directory", e))?,
        };

        if self.runtime.max_concurrent == Some(0) {
            return Err(Error::configuration(
                "max concurrent fetches must be at least 1",
            ));
        }

        if self.runtime.region.trim().is_empty() {
            return Err(Error::configuration("region must not be empty"));
        }

        let parameters_file = resolve(
            &working_dir,
            self.parameters_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PARAMETERS_FILE)),
        );
        let output_file = resolve(
            &working_dir,
            self.output_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        );

        Ok(Config {
            parameters_file,
            output_file,
            parameters: self.parameters,
            runtime_settings: self.runtime,
        })
    }
}

fn resolve(working_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        working_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_against_working_dir() {
        let config = ConfigBuilder::new()
            .working_dir("/srv/app")
            .build()
            .unwrap();

        assert_eq!(
            config.parameters_file,
            PathBuf::from("/srv/app/parameters.json")
        );
        assert_eq!(config.output_file, PathBuf::from("/srv/app/.env"));
        assert!(config.parameters.is_empty());
        assert_eq!(config.runtime_settings, RuntimeSettings::default());
        assert_eq!(config.runtime_settings.region, "eu-central-1");
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = Config::builder()
            .working_dir("/srv/app")
            .parameters_file("/etc/ssmenv/params.json")
            .output_file("out/.env")
            .build()
            .unwrap();

        assert_eq!(
            config.parameters_file,
            PathBuf::from("/etc/ssmenv/params.json")
        );
        assert_eq!(config.output_file, PathBuf::from("/srv/app/out/.env"));
    }

    #[test]
    fn test_runtime_settings() {
        let config = Config::builder()
            .working_dir("/")
            .parameters(vec!["stage=dev".to_string()])
            .region("us-east-1")
            .with_decryption(true)
            .max_concurrent(Some(4))
            .dry_run(true)
            .build()
            .unwrap();

        assert_eq!(config.parameters, vec!["stage=dev"]);
        assert_eq!(config.runtime_settings.region, "us-east-1");
        assert!(config.runtime_settings.with_decryption);
        assert_eq!(config.runtime_settings.max_concurrent, Some(4));
        assert!(config.runtime_settings.dry_run);
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let err = Config::builder()
            .working_dir("/")
            .max_concurrent(Some(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_blank_region_is_rejected() {
        let err = Config::builder()
            .working_dir("/")
            .region("  ")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
