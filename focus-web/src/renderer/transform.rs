//! 2D affine transform in canvas composition order

use nalgebra::{Matrix3, Vector2, Vector3};

/// Homogeneous 3x3 affine transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d(Matrix3<f64>);

impl Transform2d {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Mirror across the vertical center of a `width`-wide area:
    /// translate by `width`, then flip x.
    pub fn mirror(width: f64) -> Self {
        Self::identity().translate(width, 0.0).scale(-1.0, 1.0)
    }

    /// Post-multiply a scale (canvas `scale` semantics)
    pub fn scale(self, x: f64, y: f64) -> Self {
        Self(self.0 * Matrix3::new_nonuniform_scaling(&Vector2::new(x, y)))
    }

    /// Post-multiply a translation (canvas `translate` semantics)
    pub fn translate(self, x: f64, y: f64) -> Self {
        Self(self.0 * Matrix3::new_translation(&Vector2::new(x, y)))
    }

    /// Map a point from authored coordinates to device coordinates
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.0 * Vector3::new(x, y, 1.0);
        (p.x, p.y)
    }

    /// Horizontal scale factor sign and magnitude
    pub fn x_scale(&self) -> f64 {
        self.0[(0, 0)]
    }

    pub fn y_scale(&self) -> f64 {
        self.0[(1, 1)]
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::identity()
    }
}
