//! fabcfg CLI entry point.

use anyhow::Result;
use clap::Parser;

use fabric_config_ext::cli::{self, commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        cli::handle_error(&err, cli.json);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let lookup = cli::load_lookup(cli)?;
    let _logger = cli::init_logging(cli, &lookup)?;
    tracing::debug!(backends = lookup.len(), "configuration ready");

    match &cli.command {
        Commands::Get(args) => commands::get::execute(args, &lookup, cli.json),
        Commands::Crypto => commands::crypto::execute(&lookup, cli.json),
    }
}
