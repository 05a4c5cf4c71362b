pub mod float;
pub mod tuple;
pub mod color;
pub mod matrix;
pub mod transform;
pub mod error;

pub use float::{approx_eq, DEFAULT_EPSILON};
pub use tuple::Tuple;
pub use color::Color;
pub use matrix::Matrix;
pub use transform::{Shearing, Transform};
pub use error::{MatrixError, Result};
