//! 4×4 affine constructors. Each starts from the identity and overwrites the
//! cells its transform owns. Rotations are right-handed: a positive angle
//! turns counter-clockwise when looking down the axis toward the origin.

use crate::matrix::Matrix;

// ─── Constructors ─────────────────────────────────────────────────────────────

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m[(0, 0)] = x;
    m[(1, 1)] = y;
    m[(2, 2)] = z;
    m
}

pub fn rotation_x(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    let mut m = Matrix::identity(4);
    m[(1, 1)] = c;
    m[(1, 2)] = -s;
    m[(2, 1)] = s;
    m[(2, 2)] = c;
    m
}

pub fn rotation_y(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    let mut m = Matrix::identity(4);
    m[(0, 0)] = c;
    m[(0, 2)] = s;
    m[(2, 0)] = -s;
    m[(2, 2)] = c;
    m
}

pub fn rotation_z(radians: f64) -> Matrix {
    let (s, c) = radians.sin_cos();
    let mut m = Matrix::identity(4);
    m[(0, 0)] = c;
    m[(0, 1)] = -s;
    m[(1, 0)] = s;
    m[(1, 1)] = c;
    m
}

/// Shear factors. `xy` moves x in proportion to y, `zx` moves z in
/// proportion to x, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shearing {
    pub xy: f64,
    pub xz: f64,
    pub yx: f64,
    pub yz: f64,
    pub zx: f64,
    pub zy: f64,
}

pub fn shearing(s: Shearing) -> Matrix {
    let mut m = Matrix::identity(4);
    m[(0, 1)] = s.xy;
    m[(0, 2)] = s.xz;
    m[(1, 0)] = s.yx;
    m[(1, 2)] = s.yz;
    m[(2, 0)] = s.zx;
    m[(2, 1)] = s.zy;
    m
}

// ─── Builder ──────────────────────────────────────────────────────────────────

/// Chains transforms in application order.
///
/// `Transform::new().rotate_x(a).scale(5.0, 5.0, 5.0).translate(10.0, 5.0, 7.0)`
/// builds `T · S · R`: each step is left-multiplied onto the accumulated
/// matrix, so the rotation is applied to a point first.
#[derive(Debug, Clone)]
pub struct Transform {
    matrix: Matrix,
}

impl Default for Transform {
    fn default() -> Self { Self::new() }
}

impl Transform {
    pub fn new() -> Self { Self { matrix: Matrix::identity(4) } }

    /// Apply `m` after everything already in the chain. Panics unless `m` is 4×4.
    pub fn then(self, m: &Matrix) -> Self {
        Self { matrix: m * &self.matrix }
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self { self.then(&translation(x, y, z)) }
    pub fn scale(self, x: f64, y: f64, z: f64) -> Self { self.then(&scaling(x, y, z)) }
    pub fn rotate_x(self, radians: f64) -> Self { self.then(&rotation_x(radians)) }
    pub fn rotate_y(self, radians: f64) -> Self { self.then(&rotation_y(radians)) }
    pub fn rotate_z(self, radians: f64) -> Self { self.then(&rotation_z(radians)) }
    pub fn shear(self, s: Shearing) -> Self { self.then(&shearing(s)) }

    pub fn matrix(&self) -> &Matrix { &self.matrix }

    pub fn build(self) -> Matrix { self.matrix }
}
