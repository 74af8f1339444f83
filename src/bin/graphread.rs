//! Command line front end: loads a graph file (and optionally a name file), then prints the
//! breadth-first distances from a source node and a topological order.

use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use graphread::{
    algo::Traversal,
    io::{GraphLoader, ReportWriter, apply_names_file},
    prelude::*,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphread")]
#[command(version, about = "Breadth-first distances and topological order of a graph file", long_about = None)]
struct Args {
    /// Graph file (`<node_count> <edge_count>` header, then `<src> <dst> ["label"]` lines)
    #[arg(value_name = "GRAPHFILE")]
    graph_file: PathBuf,

    /// Optional name file with `<node_id> <label>` lines overwriting node labels
    #[arg(value_name = "NAMEFILE")]
    name_file: Option<PathBuf>,

    /// Source node of the breadth-first search
    #[arg(short, long, default_value_t = 0)]
    source: Node,

    /// Reject graph files whose number of records differs from the declared edge count
    #[arg(long)]
    strict_edge_count: bool,

    /// Do not print breadth-first distances
    #[arg(long)]
    no_bfs: bool,

    /// Do not print a topological order
    #[arg(long)]
    no_topo: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut graph = GraphLoader::new()
        .strict_edge_count(args.strict_edge_count)
        .load_file(&args.graph_file)
        .with_context(|| format!("Unable to load graph file {}", args.graph_file.display()))?;

    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );

    if let Some(name_file) = &args.name_file {
        let applied = apply_names_file(&mut graph, name_file)
            .with_context(|| format!("Unable to read name file {}", name_file.display()))?;
        info!(applied, "names applied");
    }

    let writer = ReportWriter::new();
    let stdout = io::stdout();

    if !args.no_bfs {
        let summary = graph
            .bfs(args.source)
            .context("Invalid source node for breadth-first search")?;
        info!(
            source = summary.source,
            reached = summary.reached,
            max_distance = summary.max_distance,
            "breadth-first search"
        );
        writer.try_write_bfs(
            &graph,
            graph.traversal_state(),
            BufWriter::new(stdout.lock()),
        )?;
    }

    if !args.no_topo {
        let order = graph.topological_order();
        writer.try_write_order(&graph, &order, BufWriter::new(stdout.lock()))?;
    }

    Ok(())
}
