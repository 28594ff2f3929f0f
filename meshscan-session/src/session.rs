//! Session-scoped ownership of the colorizer, visualizer and scene

use crate::{Colorizer, MeshVisualizer, SessionEvent};
use meshscan_core::Anchor;
use meshscan_scene::Scene;
use tracing::{debug, error, info, warn};

/// One scanning session's worth of visualization state
///
/// Owns the color cache, the visualizer and the scene for the lifetime of a
/// single scan; dropping the session discards all three. Events are handled
/// synchronously, one at a time, on whatever context calls
/// [`ScanSession::handle_event`].
#[derive(Debug)]
pub struct ScanSession {
    colorizer: Colorizer,
    visualizer: MeshVisualizer,
    scene: Scene,
}

impl ScanSession {
    /// Create a session with entropy-seeded colors
    pub fn new() -> Self {
        Self::with_colorizer(Colorizer::new())
    }

    /// Create a session with a reproducible color sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_colorizer(Colorizer::with_seed(seed))
    }

    /// Create a session around an existing colorizer
    pub fn with_colorizer(colorizer: Colorizer) -> Self {
        Self {
            colorizer,
            visualizer: MeshVisualizer::new(),
            scene: Scene::new(),
        }
    }

    /// Replace the default visualizer, for custom overlay settings
    pub fn set_visualizer(&mut self, visualizer: MeshVisualizer) {
        self.visualizer = visualizer;
    }

    /// The scene the renderer should display
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The session's color cache
    pub fn colorizer(&self) -> &Colorizer {
        &self.colorizer
    }

    /// Dispatch one scanner event
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AnchorAdded(anchor) => self.add_anchor(&anchor),
            SessionEvent::AnchorUpdated(anchor) => self.update_anchor(&anchor),
            SessionEvent::AnchorRemoved(id) => {
                if self.scene.remove(&MeshVisualizer::node_name(id)).is_some() {
                    debug!(anchor = %id, "removed retired anchor node");
                }
            }
            SessionEvent::Frame { anchors } => {
                let mesh_anchors = anchors.iter().filter(|a| a.kind.is_mesh()).count();
                debug!(mesh_anchors, "frame update");
            }
            SessionEvent::Failed { reason } => {
                error!(%reason, "scanning session failed");
            }
            SessionEvent::Interrupted => {
                warn!("scanning session interrupted");
            }
            SessionEvent::InterruptionEnded => {
                info!("scanning session interruption ended");
            }
        }
    }

    fn add_anchor(&mut self, anchor: &Anchor) {
        if let Some(node) = self.visualizer.node_for_anchor(anchor, &mut self.colorizer) {
            self.scene.insert(node);
        }
    }

    fn update_anchor(&mut self, anchor: &Anchor) {
        let name = MeshVisualizer::node_name(anchor.id);
        if let Some(node) = self.scene.node_mut(&name) {
            self.visualizer.update_node(node, anchor, &mut self.colorizer);
            return;
        }
        // The scanner adds before it updates; tolerate a missed add
        self.add_anchor(anchor);
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}
