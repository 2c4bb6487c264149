mod cli;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use noteport::{
    assess_suggestions, export_notes, fetch_or_sample, render, AppleScriptSource, Classifier,
    ExportFormat, NoteSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    match command_line.command {
        cli::Commands::Export {
            output,
            format,
            dry_run,
        } => export(&output, &format, dry_run),
        cli::Commands::Assess => assess(),
        cli::Commands::Serve { addr } => serve(&addr).await,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// A real export run must not silently fall back to sample data, so
/// the source failure is fatal here, unlike the API paths.
fn export(output: &Path, format: &str, dry_run: bool) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse()?;
    let notes = AppleScriptSource
        .fetch()
        .context("unable to read notes from Notes.app")?;

    if notes.is_empty() {
        bail!("no notes found; ensure Notes access is permitted");
    }

    if dry_run {
        println!("Found {} notes. Sample output:\n", notes.len());
        println!("{}", render(&notes[0], format));
        return Ok(());
    }

    let created = export_notes(&notes, output, format, &HashMap::new())?;
    println!("Exported {} notes to {}", created.len(), output.display());
    Ok(())
}

fn assess() -> anyhow::Result<()> {
    let notes = fetch_or_sample(&AppleScriptSource);
    let summary = assess_suggestions(&Classifier::default(), &notes);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

async fn serve(addr: &str) -> anyhow::Result<()> {
    let source = Arc::new(AppleScriptSource);
    let server = noteport::server::Server::bind(addr, source)
        .await
        .map_err(anyhow::Error::msg)?;
    println!("Listening on http://{}", server.addr());
    tokio::signal::ctrl_c()
        .await
        .context("failed to wait for ctrl-c")?;
    Ok(())
}
