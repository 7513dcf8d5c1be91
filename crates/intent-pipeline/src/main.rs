//! `intent` CLI entry point.

use clap::Parser;

use intent_pipeline::cli::{execute, load_config, Cli};
use intent_pipeline::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let mut observability = config.observability.clone();
    observability.json_logs |= cli.json_logs;
    init_tracing(&observability);

    execute(cli.command, &config)
}
