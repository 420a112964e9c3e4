use ssmenv_core::{EnvironmentVariables, Result};
use ssmenv_utils::write_atomic_string;
use std::path::Path;

/// Serializes resolved values to a `NAME=VALUE` env file
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvWriter;

impl EnvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render one `NAME=VALUE` line per entry, joined by `\n`, no trailing newline
    pub fn render(&self, vars: &EnvironmentVariables) -> String {
        vars.to_env_file()
    }

    /// Replace the contents of `destination` with the rendered variables.
    ///
    /// The file is swapped in atomically, so on error any previous content is
    /// left as it was.
    pub fn write(&self, vars: &EnvironmentVariables, destination: &Path) -> Result<()> {
        let content = self.render(vars);
        write_atomic_string(destination, &content)?;
        tracing::info!(
            path = %destination.display(),
            variables = vars.len(),
            "Wrote env file"
        );
        Ok(())
    }
}
