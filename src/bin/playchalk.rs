use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use playchalk::{
    CanvasSize, DEFAULT_DURATION_SECS, Play, RasterSurface, RenderMode, Selection, render,
};

#[derive(Parser, Debug)]
#[command(name = "playchalk", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a play JSON file and report its contents.
    Validate(ValidateArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG frame sequence of the animated play.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Playback time in seconds. Omit for the static edit-time picture.
    #[arg(long)]
    time: Option<f64>,

    /// Play duration in seconds.
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    duration: f64,

    /// Canvas width in pixels (height follows at 16:9).
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// TrueType/OpenType font for text layers. Text is skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for the frame sequence (frame_0000.png, ...).
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per second of the sequence.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Play duration in seconds.
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    duration: f64,

    /// Canvas width in pixels (height follows at 16:9).
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// TrueType/OpenType font for text layers. Text is skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn read_play_json(path: &Path) -> anyhow::Result<Play> {
    let f = File::open(path).with_context(|| format!("open play '{}'", path.display()))?;
    let r = BufReader::new(f);
    let play: Play = serde_json::from_reader(r).with_context(|| "parse play JSON")?;
    Ok(play)
}

fn make_surface(
    size: CanvasSize,
    font: Option<&Path>,
) -> anyhow::Result<RasterSurface> {
    let surface = RasterSurface::new(size.width.round() as u32, size.height.round() as u32)?;
    match font {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            Ok(surface.with_font_bytes(bytes)?)
        }
        None => Ok(surface),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let play = read_play_json(&args.in_path)?;
    println!(
        "{}: {} players, {} routes, {} annotations",
        args.in_path.display(),
        play.players.len(),
        play.routes.len(),
        play.annotations.len(),
    );
    if let Some(formation) = &play.formation {
        println!("formation: {formation}");
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let play = read_play_json(&args.in_path)?;
    let size = CanvasSize::from_container_width(f64::from(args.width))?;

    let mode = match args.time {
        Some(time) => RenderMode::Animated {
            time,
            duration: args.duration,
        },
        None => RenderMode::Static,
    };

    let mut surface = make_surface(size, args.font.as_deref())?;
    render(&play, Selection::None, mode, size, &mut surface);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface
        .into_image()
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "fps must be positive");
    anyhow::ensure!(
        args.duration.is_finite() && args.duration > 0.0,
        "duration must be positive"
    );

    let play = read_play_json(&args.in_path)?;
    let size = CanvasSize::from_container_width(f64::from(args.width))?;
    let font_bytes = match &args.font {
        Some(path) => Some(
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?,
        ),
        None => None,
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    // Inclusive of the final frame so the last one lands exactly at duration.
    let frame_count = (args.duration * f64::from(args.fps)).ceil() as u64 + 1;
    for i in 0..frame_count {
        let time = (f64::from(args.fps).recip() * i as f64).min(args.duration);
        let mut surface =
            RasterSurface::new(size.width.round() as u32, size.height.round() as u32)?;
        if let Some(bytes) = &font_bytes {
            surface = surface.with_font_bytes(bytes.clone())?;
        }
        render(
            &play,
            Selection::None,
            RenderMode::Animated {
                time,
                duration: args.duration,
            },
            size,
            &mut surface,
        );
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        surface
            .into_image()
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!(
        "wrote {frame_count} frames to {}",
        args.out_dir.display()
    );
    Ok(())
}
