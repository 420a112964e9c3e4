use std::path::PathBuf;

/// Result type alias for ssmenv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit status for input errors (bad template, parameters or flags)
pub const EXIT_INPUT_ERROR: i32 = 2;
/// Process exit status for parameter store failures
pub const EXIT_STORE_ERROR: i32 = 3;
/// Process exit status for local I/O failures
pub const EXIT_IO_ERROR: i32 = 4;

/// Core error type for ssmenv operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parameters file does not exist
    #[error("parameters file '{}' does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    /// The parameters file could not be parsed
    #[error("parameters file '{}' is not valid JSON: {message}", .path.display())]
    InvalidFormat {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The parameters file parsed, but is not a mapping of string to string
    #[error("parameters file '{}' has an invalid shape: {message}", .path.display())]
    InvalidSchema { path: PathBuf, message: String },

    /// A `name=value` token could not be parsed
    #[error("invalid substitution parameter '{token}': {message}")]
    InvalidParameter { token: String, message: String },

    /// A placeholder references a parameter that was not supplied
    #[error("variable '{variable}' referenced by '{template}' is not defined")]
    UndefinedVariable { variable: String, template: String },

    /// The parameter store failed to return a value
    #[error("failed to fetch parameter '{key}' for '{name}': {message}")]
    StoreLookupFailure {
        name: String,
        key: String,
        message: String,
    },

    /// The env file could not be written
    #[error("failed to write env file '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a missing parameters file error
    #[must_use]
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create an unparsable parameters file error
    #[must_use]
    pub fn invalid_format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::InvalidFormat {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a wrong-shape parameters file error
    #[must_use]
    pub fn invalid_schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed substitution parameter error
    #[must_use]
    pub fn invalid_parameter(token: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an undefined placeholder variable error
    #[must_use]
    pub fn undefined_variable(variable: impl Into<String>, template: impl Into<String>) -> Self {
        Error::UndefinedVariable {
            variable: variable.into(),
            template: template.into(),
        }
    }

    /// Create a parameter store lookup error
    #[must_use]
    pub fn store_lookup(
        name: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::StoreLookupFailure {
            name: name.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an env file write error
    #[must_use]
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Process exit status this error should terminate with
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileNotFound { .. }
            | Error::InvalidFormat { .. }
            | Error::InvalidSchema { .. }
            | Error::InvalidParameter { .. }
            | Error::UndefinedVariable { .. }
            | Error::Configuration { .. } => EXIT_INPUT_ERROR,
            Error::StoreLookupFailure { .. } => EXIT_STORE_ERROR,
            Error::WriteError { .. } | Error::FileSystem { .. } => EXIT_IO_ERROR,
        }
    }
}
