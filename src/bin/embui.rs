use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use embui::{Context, RenderStats, Scene, SceneDef, pack_rgb565};

#[derive(Parser, Debug)]
#[command(name = "embui", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scene for a number of ticks and save the last frame as a PNG.
    Frame(FrameArgs),
    /// Save one PNG per tick into a directory.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Engine ticks to run before capturing (each tick animates and renders).
    #[arg(long, default_value_t = 1)]
    ticks: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames to write.
    #[arg(long)]
    count: u32,

    /// Output directory; files are named `frame_0000.png`, `frame_0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    let def = SceneDef::from_path(path)?;
    let scene = def
        .build()
        .with_context(|| format!("build scene '{}'", path.display()))?;
    if !scene.format.is_rasterizable() {
        anyhow::bail!(
            "scene framebuffer format {:?} cannot be rasterized (use rgb565)",
            scene.format
        );
    }
    Ok(scene)
}

/// Ticks the scene `count` times, handing every rendered frame to `on_frame`.
fn drive(
    scene: Scene,
    count: u32,
    mut on_frame: impl FnMut(u32, &embui::Framebuffer<'_>, RenderStats) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let mut data = scene.alloc_framebuffer()?;
    let mut renderer = scene.renderer(&mut data)?;
    let Scene {
        graph,
        mut states,
        clear,
        ..
    } = scene;

    let mut ctx = Context::new(&mut renderer, &graph);
    ctx.set_animation_states(&mut states)?;
    for tick in 0..count {
        if let Some(clear) = clear {
            ctx.renderer_mut()
                .framebuffer_mut()
                .fill_rgb565(pack_rgb565(clear))?;
        }
        let stats = ctx.run()?;
        on_frame(tick, ctx.renderer().framebuffer(), stats)?;
    }
    Ok(())
}

fn write_png(path: &Path, fb: &embui::Framebuffer<'_>) -> anyhow::Result<()> {
    let rgba = fb.to_rgba8()?;
    let size = fb.size();
    image::save_buffer_with_format(
        path,
        &rgba,
        size.width as u32,
        size.height as u32,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.ticks > 0, "--ticks must be at least 1");
    let scene = load_scene(&args.in_path)?;
    ensure_parent_dir(&args.out)?;

    let last = args.ticks - 1;
    drive(scene, args.ticks, |tick, fb, stats| {
        if tick == last {
            tracing::info!(
                tick,
                drawn = stats.shapes_drawn,
                pixels = stats.pixels_written,
                "captured frame"
            );
            write_png(&args.out, fb)?;
        }
        Ok(())
    })?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    drive(scene, args.count, |tick, fb, stats| {
        let path = args.out_dir.join(format!("frame_{tick:04}.png"));
        tracing::debug!(tick, pixels = stats.pixels_written, path = %path.display(), "frame");
        write_png(&path, fb)
    })?;

    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}
