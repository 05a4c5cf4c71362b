mod config;
mod scenes;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::{info, LevelFilter};

use config::{SceneConfig, SceneKind};

/// Used when `TRACER_LOG` is unset. The library crates log under their own
/// targets, so each is listed next to the binary.
const DEFAULT_LOG_FILTER: &str = "error,tracer=info,tracer_math=info,tracer_canvas=info";

fn size_args(default_w: usize, default_h: usize) -> [Arg; 2] {
    [
        Arg::new("width")
            .long("width")
            .value_parser(clap::value_parser!(usize))
            .help(format!("Canvas width in pixels [default: {default_w}]")),
        Arg::new("height")
            .long("height")
            .value_parser(clap::value_parser!(usize))
            .help(format!("Canvas height in pixels [default: {default_h}]")),
    ]
}

fn cli() -> Command {
    let (pw, ph) = SceneKind::Projectile.default_size();
    let (cw, ch) = SceneKind::Clock.default_size();
    Command::new("tracer")
        .version(clap::crate_version!())
        .about("Render demo scenes to plain-text PPM")
        .after_help(
            "Logging is read from TRACER_LOG (env_logger syntax), e.g. \
             TRACER_LOG=tracer_math=debug,tracer_canvas=trace",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath)
                .help("File to write the PPM to. Writes to stdout when omitted."),
        )
        .arg(
            Arg::new("epsilon")
                .long("epsilon")
                .global(true)
                .value_parser(clap::value_parser!(f64))
                .help("Tolerance for float comparisons and singular-matrix checks"),
        )
        .subcommand(
            Command::new("projectile")
                .about("Plot the arc of a projectile under gravity and wind")
                .args(size_args(pw, ph)),
        )
        .subcommand(
            Command::new("clock")
                .about("Place twelve hour marks using rotation transforms")
                .args(size_args(cw, ch)),
        )
}

fn scene_config(matches: &ArgMatches) -> Result<SceneConfig> {
    let (kind, sub) = match matches.subcommand() {
        Some(("projectile", sub)) => (SceneKind::Projectile, sub),
        Some(("clock", sub)) => (SceneKind::Clock, sub),
        _ => anyhow::bail!("no scene selected"),
    };
    Ok(SceneConfig::from_matches(kind, sub))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("TRACER_LOG", DEFAULT_LOG_FILTER))
        .init();

    let matches = cli().get_matches();
    let cfg = scene_config(&matches)?;
    info!("rendering {:?} at {}x{}", cfg.kind, cfg.width, cfg.height);

    let canvas = scenes::render(&cfg)?;
    let ppm = canvas.to_ppm();

    match &cfg.output {
        Some(path) => {
            fs::write(path, ppm.as_bytes())
                .with_context(|| format!("writing PPM to {}", path.display()))?;
            info!("wrote {} bytes to {}", ppm.len(), path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(ppm.as_bytes()).context("writing PPM to stdout")?;
            out.flush()?;
        }
    }
    Ok(())
}
