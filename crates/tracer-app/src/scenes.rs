//! Demo scenes that drive the library end to end.

use std::f64::consts::PI;

use anyhow::{Context, Result};
use log::info;
use tracer_canvas::Canvas;
use tracer_math::{Color, Transform, Tuple};

use crate::config::{SceneConfig, SceneKind};

pub fn render(cfg: &SceneConfig) -> Result<Canvas> {
    let mut canvas = Canvas::new(cfg.width, cfg.height)
        .with_context(|| format!("creating {}x{} canvas", cfg.width, cfg.height))?;
    match cfg.kind {
        SceneKind::Projectile => {
            projectile(&mut canvas)?;
        }
        SceneKind::Clock => {
            clock(&mut canvas, cfg.epsilon)?;
        }
    }
    Ok(canvas)
}

// ─── Projectile ───────────────────────────────────────────────────────────────

const BLOCK: usize = 3;

struct Environment {
    gravity: Tuple,
    wind: Tuple,
}

struct Projectile {
    position: Tuple,
    velocity: Tuple,
}

impl Projectile {
    fn tick(self, env: &Environment) -> Self {
        Self {
            position: self.position + self.velocity,
            velocity: self.velocity + env.gravity + env.wind,
        }
    }

    /// Top-left of the plotted block while the whole block fits on the canvas.
    fn block_origin(&self, width: usize, height: usize) -> Option<(usize, usize)> {
        let (x, y) = (self.position.x, self.position.y);
        if x < 0.0 || y < 0.0 || x + BLOCK as f64 >= width as f64 || y + BLOCK as f64 >= height as f64 {
            return None;
        }
        Some((x as usize, y as usize))
    }
}

/// Plot a projectile's arc; returns the number of ticks drawn.
pub fn projectile(canvas: &mut Canvas) -> Result<usize> {
    let env = Environment {
        gravity: Tuple::vector(0.0, -0.1, 0.0),
        wind: Tuple::vector(-0.01, 0.0, 0.0),
    };
    let mut p = Projectile {
        position: Tuple::point(0.0, 1.0, 0.0),
        velocity: Tuple::vector(1.0, 1.8, 0.0).normalize() * 11.25,
    };
    let color = Color::new(1.0, 0.5, 0.25);
    let (width, height) = (canvas.width(), canvas.height());

    let mut ticks = 0;
    while let Some((x, y)) = p.block_origin(width, height) {
        for i in 0..BLOCK {
            for j in 0..BLOCK {
                // Canvas rows grow downward; world y grows upward.
                canvas.write_pixel(x + i, height - 1 - (y + j), color)?;
            }
        }
        p = p.tick(&env);
        ticks += 1;
    }
    info!("projectile left the {width}x{height} canvas after {ticks} ticks");
    Ok(ticks)
}

// ─── Clock ────────────────────────────────────────────────────────────────────

/// Plot twelve hour marks on a circle of radius 3/8 of the canvas's shorter
/// side, so the face stays on a non-square canvas.
/// Each mark is `point(0, 0, 1)` turned about Y, then scaled and moved to
/// the centre; the XZ plane maps onto the canvas.
pub fn clock(canvas: &mut Canvas, epsilon: f64) -> Result<Vec<(usize, usize)>> {
    let (width, height) = (canvas.width(), canvas.height());
    let radius = width.min(height) as f64 * 3.0 / 8.0;
    let (cx, cz) = (width as f64 / 2.0, height as f64 / 2.0);
    let twelve = Tuple::point(0.0, 0.0, 1.0);

    let mut marks = Vec::with_capacity(12);
    for hour in 0..12 {
        let m = Transform::new()
            .rotate_y(hour as f64 * PI / 6.0)
            .scale(radius, 0.0, radius)
            .translate(cx, 0.0, cz)
            .build();
        let p = m.mul_tuple(twelve)?;
        // A coordinate a hair under an integer would otherwise truncate to
        // the neighbouring pixel.
        let (x, y) = (snap(p.x, epsilon) as usize, snap(p.z, epsilon) as usize);
        canvas.write_pixel(x, y, Color::WHITE)?;
        marks.push((x, y));
    }
    info!("placed {} clock marks on a {width}x{height} canvas", marks.len());
    Ok(marks)
}

fn snap(v: f64, epsilon: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < epsilon { r } else { v }
}
