//! Synthetic scanner producing anchor events like a depth-sensing device

use meshscan_core::{Anchor, AnchorId, MeshBuffer, Point3f, Transform3D, Vector3f};
use meshscan_session::SessionEvent;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Side length of each simulated surface patch, in meters
const PATCH_SIZE: f32 = 0.5;

/// Height noise applied to patch vertices, in meters
const PATCH_ROUGHNESS: f32 = 0.02;

/// Grid resolution a fragment starts with
const INITIAL_RESOLUTION: usize = 2;

/// Grid resolution a fragment refines toward as scanning continues
const MAX_RESOLUTION: usize = 8;

struct Fragment {
    id: AnchorId,
    origin: Vector3f,
    resolution: usize,
}

/// Emits the anchor event stream a real reconstruction session would
///
/// Each tracked fragment is a rough grid patch that appears at a random
/// position and refines (higher resolution, fresh noise) on every update,
/// mimicking a scanner revisiting the same surface. Fragments are retired
/// once the tracker is full, so removal events show up too.
pub struct SimulatedScanner {
    rng: SmallRng,
    fragments: Vec<Fragment>,
    max_fragments: usize,
}

impl SimulatedScanner {
    pub fn new(seed: u64, max_fragments: usize) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            fragments: Vec::new(),
            max_fragments: max_fragments.max(1),
        }
    }

    /// Advance the simulation by one frame
    ///
    /// Returns the events of that frame in delivery order, ending with the
    /// frame-update event carrying every tracked anchor.
    pub fn step(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if self.fragments.len() < self.max_fragments && self.rng.gen_bool(0.4) {
            events.push(self.spawn_fragment());
        } else if self.fragments.len() == self.max_fragments && self.rng.gen_bool(0.05) {
            events.push(self.retire_fragment());
        }

        if !self.fragments.is_empty() && self.rng.gen_bool(0.8) {
            events.push(self.refine_fragment());
        }

        events.push(SessionEvent::Frame {
            anchors: self.fragments.iter().map(|f| self.anchor_for(f)).collect(),
        });
        events
    }

    fn spawn_fragment(&mut self) -> SessionEvent {
        let fragment = Fragment {
            id: AnchorId::new(),
            origin: Vector3f::new(
                self.rng.gen_range(-2.0..2.0),
                0.0,
                self.rng.gen_range(-2.0..2.0),
            ),
            resolution: INITIAL_RESOLUTION,
        };
        let anchor = self.anchor_for(&fragment);
        self.fragments.push(fragment);
        SessionEvent::AnchorAdded(anchor)
    }

    fn refine_fragment(&mut self) -> SessionEvent {
        let index = self.rng.gen_range(0..self.fragments.len());
        if self.fragments[index].resolution < MAX_RESOLUTION {
            self.fragments[index].resolution += 1;
        }
        let anchor = self.anchor_for(&self.fragments[index]);
        SessionEvent::AnchorUpdated(anchor)
    }

    fn retire_fragment(&mut self) -> SessionEvent {
        let index = self.rng.gen_range(0..self.fragments.len());
        let fragment = self.fragments.swap_remove(index);
        SessionEvent::AnchorRemoved(fragment.id)
    }

    fn anchor_for(&self, fragment: &Fragment) -> Anchor {
        // Re-derive the patch noise from the fragment id and resolution so a
        // frame snapshot matches what add/update events delivered
        let mut patch_rng = SmallRng::seed_from_u64(
            fragment.id.to_string().as_bytes().iter().fold(
                fragment.resolution as u64,
                |hash, &byte| hash.wrapping_mul(31).wrapping_add(byte as u64),
            ),
        );
        let buffer = grid_patch(fragment.resolution, &mut patch_rng);
        Anchor::mesh(
            fragment.id,
            Transform3D::translation(fragment.origin),
            buffer,
        )
    }
}

/// Build a noisy grid patch with computed per-vertex normals
fn grid_patch(resolution: usize, rng: &mut SmallRng) -> MeshBuffer {
    let step = PATCH_SIZE / resolution as f32;
    let side = resolution + 1;

    let mut vertices = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            vertices.push(Point3f::new(
                col as f32 * step,
                rng.gen_range(-PATCH_ROUGHNESS..PATCH_ROUGHNESS),
                row as f32 * step,
            ));
        }
    }

    let mut faces = Vec::with_capacity(resolution * resolution * 2);
    for row in 0..resolution {
        for col in 0..resolution {
            let i = (row * side + col) as u32;
            let right = i + 1;
            let below = i + side as u32;
            let diagonal = below + 1;
            faces.push([i, below, right]);
            faces.push([right, below, diagonal]);
        }
    }

    let mut buffer = MeshBuffer::from_parts(vertices, Vec::new(), faces);
    buffer.compute_vertex_normals();
    buffer
}
