//! Scanning-session event handling for meshscan
//!
//! This crate turns the anchor event stream of an external depth scanner
//! into scene-graph content:
//! - [`Colorizer`] assigns each anchor an identity-stable random color
//! - [`MeshVisualizer`] builds and refreshes per-anchor scene nodes,
//!   including the red "normals" debug overlay
//! - [`ScanSession`] owns both for the lifetime of one scan and dispatches
//!   [`SessionEvent`]s to them

pub mod colorizer;
pub mod events;
pub mod session;
pub mod visualizer;

pub use colorizer::*;
pub use events::*;
pub use session::*;
pub use visualizer::*;
