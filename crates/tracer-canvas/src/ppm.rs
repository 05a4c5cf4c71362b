//! Plain-text PPM (P3) serialization.
//!
//! Layout: a three-line header (`P3`, `<width> <height>`, `255`), then one
//! block per canvas row holding its red, green and blue values as decimal
//! integers. P3 readers reject lines over 70 characters, so each row is
//! wrapped on its own: once a line reaches `PPM_MAX_LINE_WIDTH - 3`
//! characters it is broken after the value just written, and a value that
//! would push a line past the limit starts a fresh line instead. Rows are
//! separated by a newline of their own, so a row whose last value triggered
//! a break is followed by an empty line. There is no newline after the final
//! row.

use log::trace;

use crate::canvas::Canvas;

pub const PPM_FORMAT: &str = "P3";
pub const PPM_MAX_COLOR_VALUE: u8 = 255;
pub const PPM_MAX_LINE_WIDTH: usize = 70;

/// Break once a line is this long, before the hard limit is reached.
const WRAP_AT: usize = PPM_MAX_LINE_WIDTH - 3;

/// Scale a `[0, 1]` channel to `[0, 255]`, clamp, and round half up.
/// NaN becomes 0.
pub fn scale_channel(v: f64) -> u8 {
    let max = f64::from(PPM_MAX_COLOR_VALUE);
    let scaled = (v * max).clamp(0.0, max);
    // `round` is half-away-from-zero, which is half-up once clamped non-negative.
    scaled.round() as u8
}

// ─── Line wrapping ────────────────────────────────────────────────────────────

/// Accumulates one canvas row's tokens into lines no longer than
/// `PPM_MAX_LINE_WIDTH`.
struct RowWriter<'a> {
    out: &'a mut String,
    line_len: usize,
}

impl<'a> RowWriter<'a> {
    fn new(out: &'a mut String) -> Self { Self { out, line_len: 0 } }

    fn push(&mut self, token: &str) {
        if self.line_len > 0 {
            if self.line_len + 1 + token.len() > PPM_MAX_LINE_WIDTH {
                self.break_line();
            } else {
                self.out.push(' ');
                self.line_len += 1;
            }
        }
        self.out.push_str(token);
        self.line_len += token.len();
        if self.line_len >= WRAP_AT {
            self.break_line();
        }
    }

    fn break_line(&mut self) {
        self.out.push('\n');
        self.line_len = 0;
    }
}

// ─── Serializer ───────────────────────────────────────────────────────────────

impl Canvas {
    pub fn to_ppm(&self) -> String {
        let mut out = format!(
            "{PPM_FORMAT}\n{} {}\n{PPM_MAX_COLOR_VALUE}\n",
            self.width(),
            self.height(),
        );
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            let mut writer = RowWriter::new(&mut out);
            for color in row {
                for channel in color.channels() {
                    writer.push(&scale_channel(channel).to_string());
                }
            }
        }
        // The final row may have ended on a wrap break.
        if out.ends_with('\n') {
            out.pop();
        }
        trace!("serialized {}x{} canvas to {} bytes of PPM", self.width(), self.height(), out.len());
        out
    }
}
