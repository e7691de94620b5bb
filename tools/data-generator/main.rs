use clap::Parser;
use rand::{Rng, rngs::ThreadRng};
use serde_json::json;
use std::fs;

/// A CLI tool to generate sample documents in the editor wire format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_document.json")]
    output: String,

    /// The minimum number of nodes to generate
    #[arg(long, default_value_t = 4)]
    min: usize,

    /// The maximum number of nodes to generate
    #[arg(long, default_value_t = 16)]
    max: usize,

    /// Document name embedded in the payload
    #[arg(short, long, default_value = "generated")]
    name: String,
}

const NODE_KINDS: &[&str] = &[
    "manualTrigger",
    "agent",
    "httpRequest",
    "dataTransform",
    "print",
    "branch",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let node_count = rng.random_range(cli.min..=cli.max);
    println!(
        "Generating a document with {} nodes (bounds: {} to {})...",
        node_count, cli.min, cli.max
    );

    let nodes = generate_nodes(&mut rng, node_count);
    let connections = generate_connections(&mut rng, node_count);

    let document = json!({
        "name": cli.name,
        "nodes": nodes,
        "connections": connections,
    });

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved a sample document to '{}'",
        cli.output
    );

    Ok(())
}

/// Lays nodes out on a loose grid, first node always a trigger.
fn generate_nodes(rng: &mut ThreadRng, count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            let kind = if i == 0 {
                NODE_KINDS[0]
            } else {
                NODE_KINDS[rng.random_range(1..NODE_KINDS.len())]
            };
            let x = (i % 4) as f64 * 260.0 + rng.random_range(-30.0..30.0);
            let y = (i / 4) as f64 * 180.0 + rng.random_range(-30.0..30.0);

            json!({
                "id": format!("node-{}", i),
                "type": kind,
                "position": { "x": x, "y": y },
                "data": {
                    "label": format!("Step {}", i),
                    "enabled": rng.random_bool(0.9),
                },
            })
        })
        .collect()
}

/// Chains consecutive nodes, with occasional branch connections skipping
/// ahead on the "false" handle.
fn generate_connections(rng: &mut ThreadRng, node_count: usize) -> Vec<serde_json::Value> {
    let mut connections = Vec::new();

    for i in 0..node_count.saturating_sub(1) {
        connections.push(json!({
            "id": format!("conn-{}", i),
            "source": format!("node-{}", i),
            "target": format!("node-{}", i + 1),
        }));
    }

    for i in 0..node_count.saturating_sub(2) {
        if rng.random_bool(0.2) {
            let target = rng.random_range(i + 2..node_count);
            connections.push(json!({
                "id": format!("branch-{}", i),
                "source": format!("node-{}", i),
                "target": format!("node-{}", target),
                "sourceHandle": "false",
            }));
        }
    }

    connections
}
