//! Loads road features and, optionally, graph vertices, and logs a summary.
//!
//! Usage:
//! ```text
//! cargo run --example inspect -- roads.geojson                  # roads only
//! cargo run --example inspect -- roads.geojson vertices.json    # roads + graph
//! RUST_LOG=roadgraph=debug cargo run --example inspect -- roads.geojson
//! ```

use std::error::Error;
use std::fs;

use roadgraph::{Axis, EdgeIndex, Graph, GraphParams, Road};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for the demo and the crate.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("inspect=info".parse().unwrap_or_default())
        .add_directive("roadgraph=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let Some(roads_path) = args.next() else {
        return Err("usage: inspect <roads.geojson> [vertices.json]".into());
    };

    let mut roads = Road::collection_from_json_str(&fs::read_to_string(&roads_path)?)?;
    for (i, road) in roads.iter_mut().enumerate() {
        road.exaggerate_axis(Axis::Y, 2.0);
        info!(road = i, points = road.coordinates().len(), "{road}");
    }

    if let Some(vertices_path) = args.next() {
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&vertices_path)?)?;
        let graph = Graph::from_value(&value, GraphParams::default())?;
        let edges = graph.edge_index().map_or(0, EdgeIndex::len);
        info!(edges, "{graph}");
        if let Some(first) = graph.nodes().first() {
            info!("\n{first}");
        }
    }

    Ok(())
}
