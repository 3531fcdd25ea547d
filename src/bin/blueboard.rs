use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blueboard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the API and WebSocket server.
    Serve(blueboard::ServeArgs),
    /// Run the rule-based text-generation service.
    AiService(blueboard::AiServiceArgs),
    /// Render a single frame of a scene as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON (an array of objects).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time since playback started, in milliseconds.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Container width in pixels; the frame is sized like the live canvas.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => runtime()?
            .block_on(blueboard::serve(args))
            .context("serve"),
        Command::AiService(args) => runtime()?
            .block_on(blueboard::serve_ai(args))
            .context("ai service"),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")
}

fn read_scene_json(path: &Path) -> anyhow::Result<blueboard::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: blueboard::Scene =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let surface = blueboard::Surface::for_container(args.width);

    let mut painter = blueboard::CpuPainter::default();
    blueboard::render_scene_at(
        &scene,
        Duration::from_millis(args.at_ms),
        surface,
        &mut painter,
    )?;
    let frame = painter
        .take_frame()
        .context("painter produced no frame")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
