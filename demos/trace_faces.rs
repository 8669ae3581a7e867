//! Traces the faces of a small drawing and dumps its boundaries as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example trace_faces
//! RUST_LOG=planar_faces=trace cargo run --example trace_faces
//! ```

use std::error::Error;

use planar_faces::math::Point2;
use planar_faces::operations::faces::{BuildFaces, FaceParams};
use planar_faces::topology::PlanarGraph;
use planar_faces::BoundaryPool;

fn rect(graph: &mut PlanarGraph, x0: f64, y0: f64, x1: f64, y1: f64) -> planar_faces::Result<()> {
    graph.add_polygon(&[
        Point2::new(x0, y0),
        Point2::new(x1, y0),
        Point2::new(x1, y1),
        Point2::new(x0, y1),
    ])?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for this crate.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar_faces=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut graph = PlanarGraph::new();
    rect(&mut graph, 0.0, 0.0, 10.0, 10.0)?;
    rect(&mut graph, 3.0, 3.0, 7.0, 7.0)?;
    rect(&mut graph, 14.0, 2.0, 16.0, 4.0)?;

    let mut pool = BoundaryPool::new();
    let faces = BuildFaces::new(FaceParams::default()).execute(&graph, &mut pool)?;

    for (index, face) in faces.faces.iter().chain([&faces.unbounded]).enumerate() {
        println!("face {index}:");
        if let Some(id) = face.boundary {
            println!("  boundary {}", serde_json::to_string(&pool.serialize(id)?)?);
        }
        for &hole in &face.holes {
            println!("  hole     {}", serde_json::to_string(&pool.serialize(hole)?)?);
        }
    }

    faces.release(&mut pool)?;
    println!("pooled boundaries: {}", pool.pooled_len());
    Ok(())
}
