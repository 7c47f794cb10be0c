use crate::config::RenderOpts;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::FrameSink;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FlockError, FlockResult};
use crate::render::field::VectorField;
use crate::render::frame::FrameRGBA;
use crate::render::raster::FieldRasterizer;
use crate::trajectory::loader::Trajectory;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Frame counts for one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames requested (the step count).
    pub frames_total: u64,
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Glyphs per frame.
    pub glyphs: usize,
}

/// `<name>.<ext>`, appending rather than replacing any dot already in `name`.
pub fn artifact_path(name: impl AsRef<Path>, ext: &str) -> PathBuf {
    let mut s = OsString::from(name.as_ref().as_os_str());
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Render `steps` frames of `trajectory` to `<name>.mp4` through the system `ffmpeg`.
#[tracing::instrument(skip(name, trajectory, opts), fields(name = %name.as_ref().display()))]
pub fn render_to_mp4(
    name: impl AsRef<Path>,
    trajectory: &Trajectory,
    steps: usize,
    opts: &RenderOpts,
) -> FlockResult<RenderStats> {
    let out_path = artifact_path(name, "mp4");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out_path.clone(),
        overwrite: opts.overwrite,
        bg_rgba: opts.background_rgba,
    });
    let stats = render_into(trajectory, steps, opts, &mut sink)?;
    tracing::info!(
        out = %out_path.display(),
        frames = stats.frames_rendered,
        "wrote video"
    );
    Ok(stats)
}

/// Drive the animation: draw the field from step 0, then overwrite it with every step
/// `0..steps` in order and push each frame to `sink`.
///
/// A step missing an agent present at step 0 fails with
/// [`FlockError::SparsePopulation`] when that frame is reached; earlier frames have already
/// been pushed and `sink.end()` is not called.
pub fn render_into(
    trajectory: &Trajectory,
    steps: usize,
    opts: &RenderOpts,
    sink: &mut dyn FrameSink,
) -> FlockResult<RenderStats> {
    if steps == 0 {
        return Err(FlockError::validation(
            "nothing to render: trajectory has zero steps",
        ));
    }

    let mut raster = FieldRasterizer::new(opts)?;
    let agents = trajectory.agents();
    let (offsets, uvc) = trajectory.frame(0, agents)?;
    let mut field = VectorField::new(offsets, uvc)?;

    sink.begin(opts.sink_config())?;

    let mut stats = RenderStats {
        frames_total: steps as u64,
        frames_rendered: 0,
        glyphs: field.len(),
    };
    for step in 0..steps {
        let (offsets, uvc) = trajectory.frame(step, agents)?;
        field.update(offsets, uvc)?;
        let frame = raster.draw(&field)?;
        sink.push_frame(FrameIndex(step as u64), &frame)?;
        stats.frames_rendered += 1;
        tracing::trace!(step, "pushed frame");
    }
    sink.end()?;

    tracing::debug!(
        frames = stats.frames_rendered,
        glyphs = stats.glyphs,
        "render complete"
    );
    Ok(stats)
}

/// Render the single frame for `step`, with viewport and arrow scale taken from step 0.
pub fn render_still(
    trajectory: &Trajectory,
    step: usize,
    opts: &RenderOpts,
) -> FlockResult<FrameRGBA> {
    let mut raster = FieldRasterizer::new(opts)?;
    let agents = trajectory.agents();
    let (offsets, uvc) = trajectory.frame(0, agents)?;
    let mut field = VectorField::new(offsets, uvc)?;

    let (offsets, uvc) = trajectory.frame(step, agents)?;
    field.update(offsets, uvc)?;
    raster.draw(&field)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
