//! 3D transformation utilities

use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A rigid 3D transformation placing anchor-local geometry in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f32>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(
        translation: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
    ) -> Self {
        let isometry = Isometry3::from_parts(translation.into(), rotation);
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a direction vector
    pub fn transform_vector(&self, vector: &Vector3<f32>) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f32>> for Transform3D {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}

impl From<Isometry3<f32>> for Transform3D {
    fn from(isometry: Isometry3<f32>) -> Self {
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_moves_point() {
        let transform = Transform3D::translation(Vector3::new(1.0, 2.0, 3.0));
        let moved = transform.transform_point(&Point3::origin());
        assert_relative_eq!(moved.x, 1.0);
        assert_relative_eq!(moved.y, 2.0);
        assert_relative_eq!(moved.z, 3.0);
    }

    #[test]
    fn test_translation_leaves_vectors_alone() {
        let transform = Transform3D::translation(Vector3::new(1.0, 2.0, 3.0));
        let direction = transform.transform_vector(&Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(direction.norm(), 1.0);
        assert_relative_eq!(direction.y, 1.0);
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        let a = Transform3D::translation(Vector3::new(1.0, 0.0, 0.0));
        let b = Transform3D::translation(Vector3::new(0.0, 1.0, 0.0));
        let moved = (a * b).transform_point(&Point3::origin());
        assert_relative_eq!(moved.x, 1.0);
        assert_relative_eq!(moved.y, 1.0);
    }
}
