//! stl2blocks - render STL files as Minecraft blocks
//!
//! Usage:
//!   stl2blocks -f part.stl -b stone             Dry run, report what would be placed
//!   stl2blocks -f part.stl -b stone -v          Also log every console command
//!   stl2blocks -f part.stl -b stone -c          Send the commands to the server console
//!
//! Logging goes to stderr and honours `RUST_LOG`; `--summary-json` writes the
//! run summary to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use stlvox_raster::{convert, deliver, TracingReporter};
use tracing::{info, Level};

mod cli;
mod screen;

use cli::Cli;
use screen::ScreenConsoleSink;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli
        .conversion_config()
        .context("Invalid coordinate options")?;

    info!(file = %cli.file.display(), "reading STL");
    let mesh = stlvox_mesh::parse_file(&cli.file)
        .with_context(|| format!("Failed to load STL file: {}", cli.file.display()))?;
    info!(
        encoding = ?mesh.encoding,
        name = %mesh.name,
        triangles = mesh.triangle_count(),
        "decoded mesh"
    );

    let reporter = TracingReporter::default();
    let conversion = convert(&mesh, &config, &reporter);

    if !cli.commit {
        info!("dry run, pass --commit to send commands to the console");
    }
    let mut sink = ScreenConsoleSink::new(&cli.screen, &cli.page, &cli.block_type)
        .with_commit(cli.commit)
        .with_verbose(cli.verbose);
    let delivered = deliver(conversion.accumulator(), &mut sink, &reporter).with_context(|| {
        format!(
            "Failed to send blocks to screen session '{}' page {}",
            cli.screen, cli.page
        )
    })?;
    info!(delivered, sent = sink.sent(), "done");

    if cli.summary_json {
        let json = serde_json::to_string_pretty(&conversion.summary())
            .context("Failed to serialize summary")?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}
