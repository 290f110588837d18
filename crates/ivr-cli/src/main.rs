//! `ivr-sim`: load a menu description, simulate, print the report.

mod args;

use anyhow::Context;
use clap::Parser;
use ivr_core::config::IvrConfig;
use ivr_core::errors::IvrErrorCode;
use ivr_core::graph::diagnose;
use ivr_core::loader;

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    ivr_core::tracing::init_tracing();
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = IvrConfig::load(&cwd, cli.config.as_deref(), Some(&cli.overrides()))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    let graph = loader::load_from_path(&cli.input_file)
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    tracing::info!(
        file = %cli.input_file.display(),
        menus = graph.node_count(),
        "menus loaded"
    );
    diagnose(&graph).log_warnings();

    let report = ivr_analysis::analyze(&graph, &config)
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
