use clap::Parser;
use seqflow::prelude::*;
use serde_json::Value;
use std::fs;
use std::process;

/// Decode the sequence-flow shapes of an editor document into domain
/// edges and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "seqflow-cli", version, about)]
struct Cli {
    /// Path to an editor document: either a JSON array of shapes or an
    /// object with a `childShapes` array.
    document: String,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Drop decoded edges that are missing a source or target reference.
    #[arg(long)]
    connected_only: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&cli.document)?;
    let document: Value = serde_json::from_str(&content)?;

    let raw_shapes = document
        .as_array()
        .or_else(|| document.get("childShapes").and_then(Value::as_array))
        .ok_or("expected a JSON array of shapes or an object with `childShapes`")?;

    let mut shapes = Vec::with_capacity(raw_shapes.len());
    for raw in raw_shapes {
        shapes.push(EditorShape::from_value(raw)?);
    }

    let index = ShapeIndex::from_shapes(&shapes);
    let mut edges: Vec<FlowEdge> = shapes
        .iter()
        .filter(|shape| shape.is_sequence_flow())
        .map(|shape| SequenceFlowCodec::decode(shape, &index, &index))
        .collect();

    if cli.connected_only {
        edges.retain(FlowEdge::is_connected);
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&edges)?
    } else {
        serde_json::to_string(&edges)?
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
