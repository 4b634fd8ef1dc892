//! CLI entry point for the nampi-parse table transformer.

use std::path::PathBuf;

use clap::Parser as _;
use tracing_subscriber::{fmt, EnvFilter};

use nampi_graph::OutputFormat;
use nampi_parse::config::ParseConfig;
use nampi_parse::{Parser, Tables};

#[derive(clap::Parser)]
#[command(name = "nampi-parse")]
#[command(about = "Transform NAMPI input tables into an RDF graph")]
struct Cli {
    /// Directory containing the input CSV tables.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the serialized graph.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: turtle, ntriples.
    #[arg(short, long)]
    format: Option<String>,

    /// Base IRI for minted entity IRIs.
    #[arg(long)]
    base: Option<String>,

    /// Config file prefix (default: nampi).
    #[arg(short, long, default_value = "nampi")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::info!(
        input = %config.input_dir.display(),
        output = %config.output.display(),
        format = %config.format,
        "Starting parse"
    );

    let tables = Tables::load_dir(&config.input_dir)?;
    let namespaces = config.namespaces();
    let (graph, summary) = Parser::new(&tables, &namespaces).parse_with_summary()?;

    let bytes = graph.serialize(config.format)?;
    std::fs::write(&config.output, bytes)?;
    tracing::info!(path = %config.output.display(), triples = graph.len(), "Graph written");

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// File and environment config, with CLI flags taking precedence.
fn resolve_config(cli: &Cli) -> anyhow::Result<ParseConfig> {
    let mut config = ParseConfig::load(&cli.config)?;

    if let Some(input) = &cli.input {
        config.input_dir = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(format) = &cli.format {
        config.format = format.parse::<OutputFormat>()?;
    }
    if let Some(base) = &cli.base {
        config.data_base_iri = base.clone();
    }

    Ok(config)
}
