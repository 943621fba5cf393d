use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use mosaika::{ArtSession, PixelBuffer, RenderConfig, ShapeKind, TickOutcome};

#[derive(Parser, Debug)]
#[command(name = "mosaika", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint a mosaic abstraction of a source image and write it as a PNG.
    Paint(PaintArgs),
}

#[derive(Parser, Debug)]
struct PaintArgs {
    /// Source image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated shape set (circle,square,triangle,line), overriding config.
    #[arg(long)]
    shapes: Option<String>,

    /// Session duration in milliseconds, overriding config.
    #[arg(long)]
    duration_ms: Option<u64>,

    /// RNG seed; the same seed reproduces the same canvas.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Frame cadence of the driving clock.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pace ticks against the wall clock instead of simulating the timeline.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Paint(args) => cmd_paint(args),
    }
}

fn cmd_paint(args: PaintArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(p) => RenderConfig::from_path(p)?,
        None => RenderConfig::default(),
    };
    if let Some(shapes) = &args.shapes {
        config.shapes = shapes
            .split(',')
            .map(str::parse::<ShapeKind>)
            .collect::<Result<_, _>>()?;
    }
    if let Some(d) = args.duration_ms {
        config.duration_ms = d;
    }

    let img = image::open(&args.in_path)
        .with_context(|| format!("open source image '{}'", args.in_path.display()))?;
    let source = PixelBuffer::from_image(&img, config.canvas()?)?;

    let step_ms = (1000 / u64::from(args.fps.max(1))).max(1);
    let mut session = ArtSession::new(config, args.seed)?;
    session.start(source, 0)?;

    let started = Instant::now();
    let mut now_ms = 0u64;
    let mut frames = 0u64;
    loop {
        match session.tick(now_ms)? {
            TickOutcome::Painted(_) => frames += 1,
            TickOutcome::Completed | TickOutcome::Idle => break,
        }
        if args.realtime {
            std::thread::sleep(Duration::from_millis(step_ms));
            now_ms = started.elapsed().as_millis() as u64;
        } else {
            now_ms += step_ms;
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    session.write_png(&args.out)?;

    eprintln!("painted {frames} frames; wrote {}", args.out.display());
    Ok(())
}
