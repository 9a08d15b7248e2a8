use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use netroute::config::Config;
use netroute::core::{Graph, NodeId};
use netroute::services::{
    compare_algorithms, compute_route, Algorithm, RouteOutcome, RouteRequest, RouteResult,
    TopologyGenerator, TopologyStats,
};
use netroute::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "NetRoute Contributors")]
/// Random network topology generator with shortest-path forwarding tables
struct Cli {
    /// Path to a TOML config file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random topology and print it
    Generate {
        #[clap(flatten)]
        topology: TopologyArgs,
        /// Print the topology as JSON
        #[clap(long)]
        json: bool,
    },
    /// Compute the shortest route between two nodes
    Route {
        #[clap(flatten)]
        topology: TopologyArgs,
        #[clap(flatten)]
        endpoints: EndpointArgs,
        /// Shortest path algorithm, defaults to the configured one
        #[clap(short, long, value_enum)]
        algorithm: Option<Algorithm>,
        /// Print the outcome as JSON
        #[clap(long)]
        json: bool,
    },
    /// Run Dijkstra and Bellman-Ford on the same topology and compare them
    Compare {
        #[clap(flatten)]
        topology: TopologyArgs,
        #[clap(flatten)]
        endpoints: EndpointArgs,
        /// Print the comparison as JSON
        #[clap(long)]
        json: bool,
    },
}

#[derive(Args)]
struct TopologyArgs {
    /// Number of nodes to generate
    #[clap(short, long, allow_negative_numbers = true)]
    nodes: Option<i64>,
    /// Random seed, a fresh one is drawn when omitted
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct EndpointArgs {
    /// Source node, e.g. "Node 0"
    #[clap(short, long)]
    source: String,
    /// Destination node, e.g. "Node 5"
    #[clap(short, long)]
    destination: String,
}

#[derive(Tabled)]
struct ForwardingRow {
    #[tabled(rename = "Node")]
    node: String,
    #[tabled(rename = "Shortest Link Node")]
    next_hop: String,
}

#[derive(Tabled)]
struct EdgeRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Weight")]
    weight: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    logging::init(&config.log).context("Failed to initialize logging")?;

    let result = run(cli.command, &config);
    logging::shutdown();
    result
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Generate { topology, json } => {
            let (graph, seed) = build_topology(&topology, config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                print_topology(&graph, seed);
            }
        }
        Command::Route {
            topology,
            endpoints,
            algorithm,
            json,
        } => {
            let (graph, seed) = build_topology(&topology, config)?;
            let request = RouteRequest::new(
                endpoints.source,
                endpoints.destination,
                algorithm.unwrap_or(config.routing.algorithm),
            );
            let outcome = compute_route(&graph, &request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Seed: {}", seed);
                print_outcome(&outcome, config.routing.delay_per_unit_ms);
            }
        }
        Command::Compare {
            topology,
            endpoints,
            json,
        } => {
            let (graph, seed) = build_topology(&topology, config)?;
            let comparison = compare_algorithms(
                &graph,
                &NodeId::from(endpoints.source),
                &NodeId::from(endpoints.destination),
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                println!("Seed: {}", seed);
                for outcome in [&comparison.dijkstra, &comparison.bellman_ford] {
                    println!("== {} ==", outcome.algorithm());
                    print_outcome(outcome, config.routing.delay_per_unit_ms);
                }
                println!(
                    "Distances agree: {}, faster: {}",
                    comparison.distances_agree(),
                    comparison.faster()
                );
            }
        }
    }
    Ok(())
}

fn build_topology(args: &TopologyArgs, config: &Config) -> Result<(Graph, u64)> {
    let node_count = args.nodes.unwrap_or(config.topology.node_count);
    let seed = args
        .seed
        .or(config.topology.seed)
        .unwrap_or_else(rand::random);

    let mut rng = StdRng::seed_from_u64(seed);
    let graph = TopologyGenerator::generate(node_count, &mut rng)?;
    Ok((graph, seed))
}

fn print_topology(graph: &Graph, seed: u64) {
    let stats = TopologyStats::from_graph(graph);
    println!("Seed: {}", seed);
    println!(
        "Nodes: {}, Edges: {}, Isolated: {}, Average degree: {:.2}, Density: {:.4}",
        stats.node_count, stats.edge_count, stats.isolated_nodes, stats.average_degree, stats.density
    );

    let rows: Vec<EdgeRow> = graph
        .edges()
        .iter()
        .map(|e| EdgeRow {
            source: e.source.to_string(),
            target: e.target.to_string(),
            weight: e.weight,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::modern()));
}

fn print_outcome(outcome: &RouteOutcome, delay_per_unit_ms: f64) {
    match outcome {
        RouteOutcome::Found(route) => print_route(route, delay_per_unit_ms),
        RouteOutcome::NoPath(miss) => {
            println!(
                "Could not find a path from {} to {} ({:.3} ms)",
                miss.source, miss.destination, miss.runtime_ms
            );
        }
    }
}

fn print_route(route: &RouteResult, delay_per_unit_ms: f64) {
    let path: Vec<&str> = route.path.iter().map(NodeId::as_str).collect();
    println!("Shortest Path From Source to Destination: {}", path.join(" -> "));
    println!(
        "Packet Transmission Delay: {} ms",
        route.transmission_delay_ms(delay_per_unit_ms)
    );
    println!("Total Cost (Distance) of Path Chosen: {}", route.distance);
    println!("Run Time of the Algorithm: {:.3} ms", route.runtime_ms);
    println!("Number of Hop Counts: {}", route.hop_count());

    let rows: Vec<ForwardingRow> = route
        .forwarding_table
        .iter()
        .map(|entry| ForwardingRow {
            node: entry.node.to_string(),
            next_hop: entry
                .predecessor
                .as_ref()
                .map_or_else(|| "-".to_string(), NodeId::to_string),
        })
        .collect();
    println!("Forwarding Table:");
    println!("{}", Table::new(rows).with(Style::modern()));
}
