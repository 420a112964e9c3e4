/// Constants used throughout the ssmenv codebase
// Default file names, resolved against the working directory
pub const DEFAULT_PARAMETERS_FILE: &str = "parameters.json";
pub const DEFAULT_OUTPUT_FILE: &str = ".env";

// Default region for the parameter store client
pub const DEFAULT_REGION: &str = "eu-central-1";

// Environment variable names
pub const SSMENV_LOG_VAR: &str = "SSMENV_LOG";
