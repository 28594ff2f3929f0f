//! Simulated mesh-reconstruction scan driving the meshscan visualizer
//!
//! Runs a synthetic scanner for a fixed number of frames, feeds its anchor
//! events through a [`ScanSession`], and logs what a renderer would upload.

mod simulator;

use clap::Parser;
use meshscan_scene::SceneNode;
use meshscan_session::ScanSession;
use simulator::SimulatedScanner;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meshscan-demo")]
#[command(about = "Visualize a simulated real-time mesh reconstruction scan")]
struct Args {
    /// Number of simulated frames to run
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Maximum number of mesh fragments the simulated scanner tracks
    #[arg(long, default_value_t = 8)]
    fragments: usize,

    /// Seed for reproducible colors and geometry
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, frames = args.frames, fragments = args.fragments, "starting simulated scan");

    let mut scanner = SimulatedScanner::new(seed, args.fragments);
    let mut session = ScanSession::with_seed(seed);

    for frame in 0..args.frames {
        for event in scanner.step() {
            session.handle_event(event);
        }

        if frame % 30 == 29 {
            info!(
                frame = frame + 1,
                nodes = session.scene().len(),
                colors = session.colorizer().len(),
                "scan progress"
            );
        }
    }

    let (vertices, indices) = session.scene().iter().map(upload_size).fold(
        (0, 0),
        |(vertices, indices), (v, i)| (vertices + v, indices + i),
    );

    info!(
        nodes = session.scene().len(),
        colors = session.colorizer().len(),
        vertices,
        indices,
        "scan complete"
    );
    Ok(())
}

/// Vertex and index counts a renderer would upload for a node and its children
fn upload_size(node: &SceneNode) -> (usize, usize) {
    let own = node
        .geometry
        .as_ref()
        .map(|g| (g.vertex_buffer().len(), g.index_buffer().len()))
        .unwrap_or((0, 0));

    node.children.iter().map(upload_size).fold(own, |(v, i), (cv, ci)| (v + cv, i + ci))
}
