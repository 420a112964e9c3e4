use clap::Parser;
use ssmenv::pipeline::{self, Outcome};
use ssmenv::{Cli, ParameterStore, SsmParameterStore};
use ssmenv_core::{Error, LookupKeys, Result};
use std::io::Write;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    ssmenv_utils::tracing::init(cli.verbose)
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    if let Err(e) = execute(cli).await {
        tracing::debug!(error = ?e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn execute(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let settings = &config.runtime_settings;

    let outcome = pipeline::run(&config, move || async move {
        Box::new(SsmParameterStore::connect(settings).await) as Box<dyn ParameterStore>
    })
    .await?;

    match outcome {
        Outcome::DryRun(keys) => print_lookup_keys(&keys),
        Outcome::Written { path, variables } => {
            tracing::debug!(path = %path.display(), variables, "Done");
            Ok(())
        }
    }
}

fn print_lookup_keys(keys: &LookupKeys) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for (name, key) in keys {
        writeln!(stdout, "{name}={key}")
            .map_err(|e| Error::file_system("<stdout>", "write lookup keys", e))?;
    }
    stdout
        .flush()
        .map_err(|e| Error::file_system("<stdout>", "write lookup keys", e))
}
