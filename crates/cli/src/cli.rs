use clap::{ArgAction, Parser};
use ssmenv_config::{Config, ConfigBuilder};
use ssmenv_core::{Result, DEFAULT_OUTPUT_FILE, DEFAULT_PARAMETERS_FILE, DEFAULT_REGION};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssmenv")]
#[command(about = "Generate a .env file from AWS SSM parameters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The file containing the parameter definition
    #[arg(short = 'f', long, value_name = "FILE", default_value = DEFAULT_PARAMETERS_FILE)]
    pub parameters_file: PathBuf,

    /// The parameters to substitute, as name=value
    #[arg(short = 'p', long, value_name = "NAME=VALUE", num_args = 1..)]
    pub parameters: Vec<String>,

    /// The filename of the generated .env file
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// The AWS region SSM resides in
    #[arg(short = 'r', long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Decrypt SecureString parameters
    #[arg(long)]
    pub with_decryption: bool,

    /// Maximum number of parameters fetched at once (default: all)
    #[arg(long, value_name = "N")]
    pub max_concurrent: Option<usize>,

    /// Print the resolved parameter names instead of fetching them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Turn the parsed flags into an immutable [`Config`]
    pub fn into_config(self) -> Result<Config> {
        ConfigBuilder::new()
            .parameters_file(self.parameters_file)
            .output_file(self.output_file)
            .parameters(self.parameters)
            .region(self.region)
            .with_decryption(self.with_decryption)
            .max_concurrent(self.max_concurrent)
            .dry_run(self.dry_run)
            .build()
    }
}
