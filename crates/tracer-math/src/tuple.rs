//! Homogeneous 4-component coordinate. `w` tags the kind: 1 for points,
//! 0 for direction vectors. The tag is a convention, not a type-level split,
//! so arithmetic like `point - point` yields a vector naturally.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::float::approx_eq;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self { Self { x, y, z, w } }

    pub const fn point(x: f64, y: f64, z: f64) -> Self { Self::new(x, y, z, 1.0) }

    pub const fn vector(x: f64, y: f64, z: f64) -> Self { Self::new(x, y, z, 0.0) }

    pub fn is_point(&self) -> bool { self.w == 1.0 }

    pub fn is_vector(&self) -> bool { self.w == 0.0 }

    pub fn is_zero(&self) -> bool { self.to_array().iter().all(|&c| c == 0.0) }

    pub fn to_array(self) -> [f64; 4] { [self.x, self.y, self.z, self.w] }

    pub fn from_array([x, y, z, w]: [f64; 4]) -> Self { Self { x, y, z, w } }

    pub fn magnitude(&self) -> f64 { self.dot(self).sqrt() }

    /// Unit-length copy. A zero tuple is returned unchanged instead of
    /// producing NaNs.
    pub fn normalize(&self) -> Self {
        let m = self.magnitude();
        if m == 0.0 { *self } else { *self / m }
    }

    /// Dot product over all four components.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product of the xyz parts. Always a vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(&a, &b)| approx_eq(a, b, epsilon))
    }
}

// ─── Operators ────────────────────────────────────────────────────────────────

impl Add for Tuple {
    type Output = Tuple;
    fn add(self, o: Tuple) -> Tuple {
        Tuple::new(self.x + o.x, self.y + o.y, self.z + o.z, self.w + o.w)
    }
}

impl Sub for Tuple {
    type Output = Tuple;
    fn sub(self, o: Tuple) -> Tuple {
        Tuple::new(self.x - o.x, self.y - o.y, self.z - o.z, self.w - o.w)
    }
}

impl Neg for Tuple {
    type Output = Tuple;
    fn neg(self) -> Tuple { self * -1.0 }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;
    fn mul(self, s: f64) -> Tuple {
        Tuple::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;
    fn div(self, s: f64) -> Tuple {
        Tuple::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}
