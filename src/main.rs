use anyhow::Context;
use redpill::{
    cli::{Cli, Commands},
    commands::{CheckCommand, FreeCommand, ListCommand},
    config::Config,
    ui, Result,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{}", ui::error(&e.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");

    match (cli.command, cli.port) {
        (Some(Commands::Free { ports }), _) => {
            FreeCommand::execute(&ports, &config, cli.quiet, cli.json).await?;
        }
        (Some(Commands::List), _) => {
            ListCommand::execute(&config, cli.quiet, cli.json).await?;
        }
        (None, Some(port)) => {
            CheckCommand::execute(port, &config, cli.quiet, cli.json).await?;
        }
        (None, None) => {
            Cli::print_help().context("failed to print help")?;
        }
    }

    Ok(())
}
