//! 2×3 affine matrix for placing 2D geometry.
//!
//! The matrix holds the top two rows of a 3×3 homogeneous transform:
//!
//! ```text
//! | c00  c01  c02 |
//! | c10  c11  c12 |
//! ```
//!
//! A point `(x, y)` maps to `(c00·x + c01·y + c02, c10·x + c11·y + c12)`.

use glam::{Affine2, Mat2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A row-major 2×3 affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat2x3 {
    /// First row `[c00, c01, c02]`, producing the output x.
    pub row0: Vec3,
    /// Second row `[c10, c11, c12]`, producing the output y.
    pub row1: Vec3,
}

impl Mat2x3 {
    /// Creates a matrix from its two rows.
    #[inline]
    pub fn from_rows(row0: Vec3, row1: Vec3) -> Self {
        Self { row0, row1 }
    }

    /// Creates a matrix from six coefficients in row order
    /// `[c00, c01, c02, c10, c11, c12]`.
    #[inline]
    pub fn from_coeffs(c: [f32; 6]) -> Self {
        Self {
            row0: Vec3::new(c[0], c[1], c[2]),
            row1: Vec3::new(c[3], c[4], c[5]),
        }
    }

    /// Returns the six coefficients in row order.
    #[inline]
    pub fn to_coeffs(&self) -> [f32; 6] {
        [
            self.row0.x, self.row0.y, self.row0.z,
            self.row1.x, self.row1.y, self.row1.z,
        ]
    }

    /// The identity transform.
    pub const IDENTITY: Self = Self {
        row0: Vec3::X,
        row1: Vec3::Y,
    };

    /// Pure translation by `offset`.
    #[inline]
    pub fn translation(offset: Vec2) -> Self {
        Self {
            row0: Vec3::new(1.0, 0.0, offset.x),
            row1: Vec3::new(0.0, 1.0, offset.y),
        }
    }

    /// Counter-clockwise rotation by `theta` radians about the origin.
    #[inline]
    pub fn rotation(theta: f32) -> Self {
        let (sin_t, cos_t) = theta.sin_cos();
        Self {
            row0: Vec3::new(cos_t, -sin_t, 0.0),
            row1: Vec3::new(sin_t, cos_t, 0.0),
        }
    }

    /// Axis-aligned scale about the origin.
    #[inline]
    pub fn scale(factor: Vec2) -> Self {
        Self {
            row0: Vec3::new(factor.x, 0.0, 0.0),
            row1: Vec3::new(0.0, factor.y, 0.0),
        }
    }

    /// Rotation by `theta`, then scale, then translation: the usual
    /// placement of an instance in world space.
    pub fn from_scale_rotation_translation(scale: Vec2, theta: f32, offset: Vec2) -> Self {
        Self::translation(offset) * Self::rotation(theta) * Self::scale(scale)
    }

    /// Maps a point through the transform.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let h = p.extend(1.0);
        Vec2::new(self.row0.dot(h), self.row1.dot(h))
    }

    /// Maps a direction through the linear part only (no translation).
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.row0.x * v.x + self.row0.y * v.y,
            self.row1.x * v.x + self.row1.y * v.y,
        )
    }

    /// Determinant of the 2×2 linear part.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.row0.x * self.row1.y - self.row0.y * self.row1.x
    }

    /// Returns true if every coefficient is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.row0.is_finite() && self.row1.is_finite()
    }
}

impl Default for Mat2x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composition: `(a * b).transform_point(p) == a.transform_point(b.transform_point(p))`.
impl std::ops::Mul for Mat2x3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let t = self.transform_point(Vec2::new(rhs.row0.z, rhs.row1.z));
        Self {
            row0: Vec3::new(
                self.row0.x * rhs.row0.x + self.row0.y * rhs.row1.x,
                self.row0.x * rhs.row0.y + self.row0.y * rhs.row1.y,
                t.x,
            ),
            row1: Vec3::new(
                self.row1.x * rhs.row0.x + self.row1.y * rhs.row1.x,
                self.row1.x * rhs.row0.y + self.row1.y * rhs.row1.y,
                t.y,
            ),
        }
    }
}

impl From<Affine2> for Mat2x3 {
    fn from(a: Affine2) -> Self {
        let m = a.matrix2;
        Self {
            row0: Vec3::new(m.x_axis.x, m.y_axis.x, a.translation.x),
            row1: Vec3::new(m.x_axis.y, m.y_axis.y, a.translation.y),
        }
    }
}

impl From<Mat2x3> for Affine2 {
    fn from(m: Mat2x3) -> Self {
        Affine2::from_mat2_translation(
            Mat2::from_cols(
                Vec2::new(m.row0.x, m.row1.x),
                Vec2::new(m.row0.y, m.row1.y),
            ),
            Vec2::new(m.row0.z, m.row1.z),
        )
    }
}
