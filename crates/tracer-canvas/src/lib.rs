pub mod canvas;
pub mod ppm;
pub mod error;

pub use canvas::Canvas;
pub use error::{CanvasError, Result};
pub use ppm::{scale_channel, PPM_FORMAT, PPM_MAX_COLOR_VALUE, PPM_MAX_LINE_WIDTH};
