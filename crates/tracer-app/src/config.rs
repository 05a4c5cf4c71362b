use std::path::PathBuf;

use clap::ArgMatches;
use tracer_math::DEFAULT_EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Projectile,
    Clock,
}

impl SceneKind {
    pub fn default_size(self) -> (usize, usize) {
        match self {
            Self::Projectile => (900, 550),
            Self::Clock => (400, 400),
        }
    }
}

/// Everything a scene needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub kind: SceneKind,
    pub width: usize,
    pub height: usize,
    pub epsilon: f64,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl SceneConfig {
    pub fn new(kind: SceneKind) -> Self {
        let (width, height) = kind.default_size();
        Self { kind, width, height, epsilon: DEFAULT_EPSILON, output: None }
    }

    /// Overlay the subcommand's flags onto the scene defaults. Global flags
    /// (`--output`, `--epsilon`) are read from the same matches since clap
    /// propagates them down.
    pub fn from_matches(kind: SceneKind, sub: &ArgMatches) -> Self {
        let mut cfg = Self::new(kind);
        if let Some(w) = sub.get_one::<usize>("width") {
            cfg.width = *w;
        }
        if let Some(h) = sub.get_one::<usize>("height") {
            cfg.height = *h;
        }
        if let Some(e) = sub.get_one::<f64>("epsilon") {
            cfg.epsilon = *e;
        }
        cfg.output = sub.get_one::<PathBuf>("output").cloned();
        cfg
    }
}
