use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "flockviz",
    version,
    about = "Render a flocking simulation log as a vector-field video"
)]
struct Cli {
    /// Simulation log with lines `step agent x y vx vy`.
    input: PathBuf,

    /// Output base name; the video is written to `<NAME>.mp4`.
    name: PathBuf,

    /// JSON render options (fps, canvas, colors, overwrite).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override playback frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Override the square frame size in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// How the number of frames is derived from the log.
    #[arg(long, value_enum, default_value_t = StepsChoice::LastRecord)]
    steps: StepsChoice,

    /// Write `<NAME>.png` for this step instead of a video.
    #[arg(long)]
    still: Option<usize>,

    /// Print the loaded positions and velocities as JSON on stdout.
    #[arg(long)]
    dump: bool,

    /// Fail if the output file already exists.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StepsChoice {
    /// One plus the step of the last record in the file.
    LastRecord,
    /// One plus the largest step in the file.
    MaxStep,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = build_opts(&cli)?;

    let trajectory = flockviz::Trajectory::from_path(&cli.input)
        .with_context(|| format!("load trajectory '{}'", cli.input.display()))?;
    let policy = match cli.steps {
        StepsChoice::LastRecord => flockviz::StepCount::LastRecord,
        StepsChoice::MaxStep => flockviz::StepCount::MaxStep,
    };
    let steps = trajectory.steps_with(policy);

    if cli.dump {
        dump_tensors(&trajectory)?;
    }

    match cli.still {
        Some(step) => write_still(&cli, &trajectory, step, &opts),
        None => {
            let stats = flockviz::render_to_mp4(&cli.name, &trajectory, steps, &opts)
                .with_context(|| format!("render '{}'", cli.name.display()))?;
            eprintln!(
                "wrote {} ({} frames, {:.2}s)",
                flockviz::artifact_path(&cli.name, "mp4").display(),
                stats.frames_rendered,
                opts.fps.frames_to_secs(stats.frames_rendered)
            );
            Ok(())
        }
    }
}

fn build_opts(cli: &Cli) -> anyhow::Result<flockviz::RenderOpts> {
    let mut opts = match &cli.config {
        Some(path) => flockviz::RenderOpts::from_path(path)
            .with_context(|| format!("read config '{}'", path.display()))?,
        None => flockviz::RenderOpts::default(),
    };
    if let Some(fps) = cli.fps {
        opts.fps = flockviz::Fps::new(fps, 1)?;
    }
    if let Some(size) = cli.size {
        opts.canvas = flockviz::Canvas::square(size);
    }
    if cli.no_overwrite {
        opts.overwrite = false;
    }
    opts.validate()?;
    Ok(opts)
}

fn dump_tensors(trajectory: &flockviz::Trajectory) -> anyhow::Result<()> {
    let doc = serde_json::json!({
        "positions": trajectory.positions(),
        "velocities": trajectory.velocities(),
    });
    let stdout = std::io::stdout().lock();
    serde_json::to_writer(stdout, &doc).context("write tensor dump")?;
    println!();
    Ok(())
}

fn write_still(
    cli: &Cli,
    trajectory: &flockviz::Trajectory,
    step: usize,
    opts: &flockviz::RenderOpts,
) -> anyhow::Result<()> {
    let out = flockviz::artifact_path(&cli.name, "png");
    if !opts.overwrite && out.exists() {
        anyhow::bail!("output file '{}' already exists", out.display());
    }

    let frame = flockviz::render_still(trajectory, step, opts)
        .with_context(|| format!("render step {step}"))?;

    // Flattened the same way as video frames.
    let rgba = frame.to_opaque_rgba8(opts.background_rgba)?;

    flockviz::ensure_parent_dir(&out)?;
    image::save_buffer_with_format(
        &out,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
