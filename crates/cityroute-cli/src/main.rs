use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cityroute_cli::commands::interactive::run_session;
use cityroute_cli::commands::map::handle_map_command;
use cityroute_cli::commands::route::{handle_route_command, RouteCommandArgs};
use cityroute_cli::output::OutputFormat;
use cityroute_cli::terminal::ColorPalette;
use cityroute_lib::{load_graph, resolve_graph_path, Graph, LoadOptions, RouteAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Time-of-day aware shortest routes between cities")]
struct Cli {
    /// Graph document to load (a file, or a directory holding cities_and_edges.json).
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Vertex capacity; defaults to the largest city id plus one.
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Output format for map and route results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Shortest-path algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::BellmanFord, global = true)]
    algorithm: AlgorithmArg,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every directed edge of the loaded graph.
    Map,
    /// Compute the cheapest route between two city names.
    Route {
        /// Starting city name.
        #[arg(long = "from")]
        from: String,
        /// Destination city name.
        #[arg(long = "to")]
        to: String,
        /// Time of day: morning, afternoon or evening.
        #[arg(long = "time")]
        time: String,
    },
    /// Prompt for queries on stdin until `exit` or end of input.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    BellmanFord,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::BellmanFord => RouteAlgorithm::BellmanFord,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let algorithm = RouteAlgorithm::from(cli.algorithm);
    let graph = load(cli.graph.as_deref(), cli.capacity)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(Command::Map) => handle_map_command(&graph, cli.format, &palette, &mut out),
        Some(Command::Route { from, to, time }) => {
            let args = RouteCommandArgs {
                from,
                to,
                time,
                algorithm,
            };
            handle_route_command(&graph, &args, cli.format, &mut out)
        }
        Some(Command::Interactive) => {
            run_session(&graph, algorithm, &palette, io::stdin().lock(), &mut out)
        }
        None => {
            handle_map_command(&graph, cli.format, &palette, &mut out)?;
            run_session(&graph, algorithm, &palette, io::stdin().lock(), &mut out)
        }
    }
}

fn load(target: Option<&Path>, capacity: Option<usize>) -> Result<Graph> {
    let path = resolve_graph_path(target).context("failed to locate the graph document")?;
    load_graph(&path, &LoadOptions { capacity })
        .with_context(|| format!("failed to load graph from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
