use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use winit::dpi::LogicalSize;

use plasma_engine::device::GpuInit;
use plasma_engine::logging::{LoggingConfig, init_logging};
use plasma_engine::window::{Runtime, RuntimeConfig};
use plasma_field::{DEFAULT_NOISE_SCALE, FieldState, PixelBuffer, PlasmaRenderer};

mod app;
mod export;

use app::PlasmaApp;

#[derive(Parser, Debug)]
#[command(name = "plasma-studio", version, about = "Recursive-subdivision plasma renderer")]
struct Cli {
    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single image and write it as a PNG.
    Frame(FrameArgs),
    /// Open a window and render the plasma to fit it.
    Window(WindowArgs),
}

#[derive(Args, Debug)]
struct FieldArgs {
    /// Seed for the four corner colors; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Per-level color jitter scale.
    #[arg(long, default_value_t = DEFAULT_NOISE_SCALE)]
    noise: f64,
}

impl FieldArgs {
    fn field(&self) -> FieldState {
        match self.seed {
            Some(seed) => FieldState::from_seed(seed),
            None => FieldState::random(),
        }
    }

    fn renderer(&self) -> PlasmaRenderer {
        PlasmaRenderer::with_noise_scale(self.noise)
    }
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    field: FieldArgs,

    /// Image width in pixels.
    #[arg(long)]
    width: u32,

    /// Image height in pixels.
    #[arg(long)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct WindowArgs {
    #[command(flatten)]
    field: FieldArgs,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Quiet period after the last resize before re-rendering.
    #[arg(long, default_value_t = 250)]
    debounce_ms: u64,

    /// Directory for `S` snapshots.
    #[arg(long, default_value = ".")]
    snapshot_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(match cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Window(args) => cmd_window(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let field = args.field.field();
    log::info!(
        "rendering {}x{} with corners {:?}",
        args.width,
        args.height,
        field.corners()
    );

    let mut buffer = PixelBuffer::try_new(args.width, args.height)
        .with_context(|| format!("allocate {}x{} frame", args.width, args.height))?;
    args.field
        .renderer()
        .render(args.width, args.height, &field, &mut buffer);

    export::save_png(&buffer, &args.out)
        .with_context(|| format!("export frame to '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_window(args: WindowArgs) -> anyhow::Result<()> {
    let config = RuntimeConfig {
        title: "plasma".to_string(),
        initial_size: LogicalSize::new(args.width, args.height),
        resize_debounce: Duration::from_millis(args.debounce_ms),
    };

    let app = PlasmaApp::new(args.field.field(), args.field.renderer(), args.snapshot_dir);

    Runtime::run(config, GpuInit::default(), app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn frame_requires_size_and_output() {
        assert!(Cli::try_parse_from(["plasma-studio", "frame", "--width", "10"]).is_err());

        let cli = parse(&[
            "plasma-studio", "frame", "--width", "320", "--height", "200", "--out", "a.png",
        ]);
        let Command::Frame(args) = cli.cmd else { panic!("expected frame") };
        assert_eq!((args.width, args.height), (320, 200));
        assert_eq!(args.out, PathBuf::from("a.png"));
        assert_eq!(args.field.seed, None);
        assert_eq!(args.field.noise, DEFAULT_NOISE_SCALE);
    }

    #[test]
    fn seeded_frames_are_reproducible() {
        let cli = parse(&[
            "plasma-studio", "frame", "--width", "1", "--height", "1", "--out", "x.png",
            "--seed", "42",
        ]);
        let Command::Frame(args) = cli.cmd else { panic!("expected frame") };
        assert_eq!(args.field.field(), FieldState::from_seed(42));
    }

    #[test]
    fn window_defaults() {
        let cli = parse(&["plasma-studio", "window"]);
        let Command::Window(args) = cli.cmd else { panic!("expected window") };
        assert_eq!(args.debounce_ms, 250);
        assert_eq!((args.width, args.height), (1280.0, 720.0));
        assert_eq!(args.snapshot_dir, PathBuf::from("."));
        assert!(cli.log.is_none());
    }

    #[test]
    fn log_flag_is_global() {
        let cli = parse(&["plasma-studio", "window", "--log", "debug", "--debounce-ms", "50"]);
        assert_eq!(cli.log.as_deref(), Some("debug"));
        let Command::Window(args) = cli.cmd else { panic!("expected window") };
        assert_eq!(args.debounce_ms, 50);
    }

    #[test]
    fn oversized_frame_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("huge.png");
        let out_arg = out.to_str().unwrap();

        let cli = parse(&[
            "plasma-studio", "frame", "--width", "4000000000", "--height", "4000000000",
            "--seed", "1", "--out", out_arg,
        ]);
        let Command::Frame(args) = cli.cmd else { panic!("expected frame") };

        let err = cmd_frame(args).unwrap_err();
        assert!(format!("{err:#}").contains("does not fit in memory"));
        assert!(!out.exists());
    }

    #[test]
    fn small_frame_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("small.png");

        let cli = parse(&[
            "plasma-studio", "frame", "--width", "6", "--height", "4", "--seed", "3",
            "--out", out.to_str().unwrap(),
        ]);
        let Command::Frame(args) = cli.cmd else { panic!("expected frame") };

        cmd_frame(args).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
