//! RGBA color values used for anchor tinting

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alpha applied to every freshly assigned anchor color
pub const ASSIGNED_ALPHA: f32 = 0.9;

/// An RGBA color with all channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from explicit channel values
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Draw a color with three independently uniform channels in `[0, 1]`
    /// and alpha fixed at [`ASSIGNED_ALPHA`]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0.0..=1.0),
            g: rng.gen_range(0.0..=1.0),
            b: rng.gen_range(0.0..=1.0),
            a: ASSIGNED_ALPHA,
        }
    }

    /// Flatten into an `[r, g, b, a]` array for vertex upload
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_channels_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let color = Color::random(&mut rng);
            assert!((0.0..=1.0).contains(&color.r));
            assert!((0.0..=1.0).contains(&color.g));
            assert!((0.0..=1.0).contains(&color.b));
        }
    }

    #[test]
    fn test_random_alpha_fixed() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(Color::random(&mut rng).a, ASSIGNED_ALPHA);
        }
    }

    #[test]
    fn test_to_array_order() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color.to_array(), [0.1, 0.2, 0.3, 0.4]);
    }
}
