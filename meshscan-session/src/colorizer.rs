//! Identity-stable color assignment for streamed anchors

use meshscan_core::{AnchorId, Color};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Assigns each anchor a random color and remembers it
///
/// The first lookup of an identifier draws a fresh color (uniform RGB,
/// alpha 0.9) and caches it; every later lookup returns that same color, in
/// any call order. The cache never evicts, so it grows with the number of
/// distinct anchors ever seen; anchor counts are bounded by the scanned
/// area in practice.
///
/// Mutation happens through `&mut self`, so a session that fans event
/// handling out across threads must wrap the colorizer in a lock to keep
/// the stability guarantee for concurrent first sightings.
#[derive(Debug)]
pub struct Colorizer {
    colors: HashMap<AnchorId, Color>,
    rng: SmallRng,
}

impl Colorizer {
    /// Create a colorizer seeded from OS entropy
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a colorizer with a fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            colors: HashMap::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Get the stable color for an anchor, assigning one on first sight
    pub fn assign_color(&mut self, id: AnchorId) -> Color {
        if let Some(&color) = self.colors.get(&id) {
            return color;
        }
        let color = Color::random(&mut self.rng);
        self.colors.insert(id, color);
        color
    }

    /// Peek at an already assigned color without assigning one
    pub fn color_for(&self, id: AnchorId) -> Option<Color> {
        self.colors.get(&id).copied()
    }

    /// Number of anchors that have been assigned a color
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if no colors have been assigned yet
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}
