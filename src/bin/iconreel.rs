use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use iconreel::scene::color::Color;
use iconreel::{
    CpuBackend, FrameIndex, FrameRange, PngSequenceSink, Registry, RenderSettings,
    RenderThreading, render_frame, render_range, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "iconreel", version)]
struct Cli {
    /// Registry JSON replacing the built-in compositions.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Log level for diagnostics on stderr.
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Write the SVG document of a single frame.
    Svg(SvgArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range as a PNG sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Opaque background as `#RRGGBB` or `#RRGGBBAA`; transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition id.
    #[arg(long)]
    comp: String,

    /// Output directory for `<comp>-<frame>.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Opaque background as `#RRGGBB` or `#RRGGBBAA`; transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Enable static-frame elision within chunks.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let registry = load_registry(cli.registry.as_deref())?;
    match cli.cmd {
        Command::List => cmd_list(&registry),
        Command::Svg(args) => cmd_svg(&registry, args),
        Command::Frame(args) => cmd_frame(&registry, args),
        Command::Render(args) => cmd_render(&registry, args),
    }
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<Registry> {
    match path {
        Some(p) => {
            Registry::from_path(p).with_context(|| format!("load registry '{}'", p.display()))
        }
        None => Ok(Registry::builtin()),
    }
}

fn settings(background: Option<&str>) -> anyhow::Result<RenderSettings> {
    let clear_rgba = background
        .map(|s| Color::parse_hex(s).map(Color::to_rgba8))
        .transpose()
        .context("parse --background")?;
    Ok(RenderSettings { clear_rgba })
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_list(registry: &Registry) -> anyhow::Result<()> {
    for e in registry.iter() {
        let c = &e.config;
        println!(
            "{}\t{}\t{}x{}\t{}/{} fps\t{} frames",
            e.id,
            e.icon.name(),
            c.canvas.width,
            c.canvas.height,
            c.fps.num,
            c.fps.den,
            c.duration_in_frames
        );
    }
    Ok(())
}

fn cmd_svg(registry: &Registry, args: SvgArgs) -> anyhow::Result<()> {
    let entry = registry.require(&args.comp)?;
    let scene = entry.render_scene(FrameIndex(args.frame));
    scene.validate()?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, scene.to_svg())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(registry: &Registry, args: FrameArgs) -> anyhow::Result<()> {
    let entry = registry.require(&args.comp)?;
    let backend = CpuBackend::new(settings(args.background.as_deref())?);
    let frame = render_frame(entry, FrameIndex(args.frame), &backend)?;

    ensure_parent(&args.out)?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(registry: &Registry, args: RenderArgs) -> anyhow::Result<()> {
    let entry = registry.require(&args.comp)?;
    let end = args.end.unwrap_or(entry.config.duration_in_frames);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let backend = CpuBackend::new(settings(args.background.as_deref())?);
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };
    let mut sink = PngSequenceSink::new(&args.out_dir, entry.id.clone());
    let stats = render_range(entry, range, &backend, &threading, &mut sink)?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}
