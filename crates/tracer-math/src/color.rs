use std::ops::{Add, Mul, Sub};

use crate::float::approx_eq;

/// Linear RGB. Channels are nominally in `[0, 1]` but nothing clamps them
/// until the canvas is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self { Self { r, g, b } }

    /// Channels in serialization order: red, green, blue.
    pub fn channels(&self) -> [f64; 3] { [self.r, self.g, self.b] }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        approx_eq(self.r, other.r, epsilon)
            && approx_eq(self.g, other.g, epsilon)
            && approx_eq(self.b, other.b, epsilon)
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, o: Color) -> Color { Color::new(self.r + o.r, self.g + o.g, self.b + o.b) }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, o: Color) -> Color { Color::new(self.r - o.r, self.g - o.g, self.b - o.b) }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, s: f64) -> Color { Color::new(self.r * s, self.g * s, self.b * s) }
}

/// Hadamard (channel-wise) product, used to blend a surface color with light.
impl Mul for Color {
    type Output = Color;
    fn mul(self, o: Color) -> Color { Color::new(self.r * o.r, self.g * o.g, self.b * o.b) }
}
