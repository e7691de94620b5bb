use clap::Parser;
use itertools::Itertools;
use rireki::document::{Document, IntoDocument, SavedDocument};
use rireki::ui::UiDocument;
use std::fs;
use std::time::Instant;

/// A CLI tool to inspect and convert node-based document files.
///
/// Documents come in two formats: editor wire JSON (`.json`) and the binary
/// payload format produced by `SavedDocument::save` (any other extension).
/// Without `--convert`, the input is inspected; with it, the input is
/// re-saved in the opposite format.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the document file (wire JSON or binary payload)
    input: String,

    /// Convert the input and write it to this path instead of inspecting
    #[arg(short, long)]
    convert: Option<String>,

    /// Document name stamped into converted payloads
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let load_start = Instant::now();
    let (document, embedded_name) = load_input(&cli.input);
    let load_duration = load_start.elapsed();

    let name = cli
        .name
        .or(embedded_name)
        .unwrap_or_else(|| "untitled".to_string());

    match cli.convert {
        Some(output) => convert(&document, &name, &output),
        None => inspect(&document, &name, &cli.input),
    }

    println!("\nFile Loading: {:?}", load_duration);
}

/// Loads either format, returning the document and any embedded name.
fn load_input(path: &str) -> (Document, Option<String>) {
    if path.ends_with(".json") {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read document file '{}': {}", path, e))
        });
        let ui_document = UiDocument::from_json_str(&json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to parse document JSON: {}", e))
        });
        let name = ui_document.name.clone();
        let document = ui_document.into_document().unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to convert document: {}", e))
        });
        (document, name)
    } else {
        let payload = SavedDocument::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load payload from '{}': {}", path, e))
        });
        let name = payload.name.clone();
        (payload.into_document(), Some(name))
    }
}

fn inspect(document: &Document, name: &str, path: &str) {
    println!("Inspecting '{}' ({})", name, path);

    println!("\n--- Document Summary ---");
    println!("Nodes:       {}", document.nodes.len());
    println!("Connections: {}", document.connections.len());

    let kinds = document.nodes.iter().map(|n| n.kind.as_str()).counts();
    if !kinds.is_empty() {
        println!("\n--- Node Kinds ---");
        for (kind, count) in kinds.iter().sorted_by_key(|(kind, _)| *kind) {
            println!("  {:<20} {}", kind, count);
        }
    }

    let labelled = document
        .nodes
        .iter()
        .filter_map(|n| n.data.get("label").and_then(|v| v.as_str()).map(|l| (n, l)))
        .collect::<Vec<_>>();
    if !labelled.is_empty() {
        println!("\n--- Labels ---");
        for (node, label) in labelled {
            println!("  {:<12} {}", node.id, label);
        }
    }

    let dangling = document.dangling_connections();
    if dangling.is_empty() {
        println!("\nAll connection endpoints resolve.");
    } else {
        println!("\n--- Dangling Connections ---");
        for connection in dangling {
            println!(
                "  {} ({} -> {})",
                connection.id, connection.source_node_id, connection.target_node_id
            );
        }
    }
}

fn convert(document: &Document, name: &str, output: &str) {
    let convert_start = Instant::now();
    let payload = SavedDocument::new(name, document);

    if output.ends_with(".json") {
        let json = payload
            .to_json_string()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render JSON: {}", e)));
        fs::write(output, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output, e))
        });
    } else {
        payload.save(output).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output, e))
        });
    }

    println!(
        "Converted '{}' ({} nodes, {} connections) to '{}' in {:?}",
        name,
        document.nodes.len(),
        document.connections.len(),
        output,
        convert_start.elapsed()
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
