//! Console route finder over the bundled Delhi Metro network.  Prints each
//! visited station as the chosen traversal reaches it, then the route.
//!
//! Usage:
//!   cargo run --example metro_route -- --from "Rajiv Chowk" --to "Model Town"
//!   cargo run --example metro_route -- --algorithm bfs --from "Welcome" --no-delay
//!   cargo run --example metro_route -- --list

use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use metrograph::{delhi::delhi_metro, prelude::*, tracing_support::init_tracing, visit_trail};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    Bfs,
    Dfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::Bfs => Algorithm::Bfs,
            AlgorithmArg::Dfs => Algorithm::Dfs,
        }
    }
}

/// Find a route through the Delhi Metro, showing each traversal step.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Traversal to run
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    algorithm: AlgorithmArg,

    /// Source station
    #[arg(long, required_unless_present = "list")]
    from: Option<String>,

    /// Destination station (Dijkstra only)
    #[arg(long)]
    to: Option<String>,

    /// Delay between steps in milliseconds, overriding the per-algorithm default
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print every step immediately
    #[arg(long, conflicts_with = "delay_ms")]
    no_delay: bool,

    /// List the stations of each line and exit
    #[arg(long)]
    list: bool,

    /// Log level for traversal diagnostics written to stderr
    #[arg(long, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level);

    let graph = match delhi_metro() {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Failed to build network: {err}");
            process::exit(1);
        }
    };

    if args.list {
        print_lines(&graph);
        return;
    }

    let pacing = if args.no_delay {
        Pacing::none()
    } else if let Some(ms) = args.delay_ms {
        Pacing::uniform(Duration::from_millis(ms))
    } else {
        Pacing::default()
    };

    let Some(from) = args.from.as_deref() else {
        eprintln!("--from is required");
        process::exit(2);
    };
    if let Err(err) = run(&graph, args.algorithm.into(), from, args.to.as_deref(), pacing) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(
    graph: &MetroGraph,
    algorithm: Algorithm,
    from: &str,
    to: Option<&str>,
    pacing: Pacing,
) -> Result<()> {
    print!("{algorithm}: ");
    match algorithm {
        Algorithm::Dijkstra => {
            let to = to.unwrap_or(from);
            let mut run = graph.dijkstra(from, to)?;
            show_steps(graph, pacing.pace(algorithm, run.by_ref()));
            println!("\n{}", run.finish().describe(graph));
        }
        Algorithm::Bfs => {
            show_steps(graph, pacing.pace(algorithm, graph.bfs(from)?));
            println!();
        }
        Algorithm::Dfs => {
            show_steps(graph, pacing.pace(algorithm, graph.dfs(from)?));
            println!();
        }
    }
    Ok(())
}

fn show_steps(graph: &MetroGraph, visits: impl Iterator<Item = Visit>) {
    let mut stdout = io::stdout();
    for visit in visits {
        let _ = write!(stdout, "{}", visit_trail(graph, [&visit]));
        let _ = stdout.flush();
    }
}

fn print_lines(graph: &MetroGraph) {
    for line in graph.lines() {
        let names: Vec<_> = graph
            .stations_on_line(line)
            .map(|sid| graph.station(sid).name())
            .collect();
        println!("{line} ({} stations): {}", names.len(), names.join(", "));
    }
}
