//! flockviz turns a flocking-simulation log into an animated vector-field video.
//!
//! # Pipeline overview
//!
//! 1. **Load**: text lines `step agent x y vx vy` -> [`Trajectory`], a ragged
//!    `[step][agent]` tensor of positions and velocities built in a single pass. Lines that do
//!    not match the record pattern are skipped.
//! 2. **Draw**: step 0 -> [`VectorField`], one arrow per agent, with viewport and arrow scale
//!    fixed from that step.
//! 3. **Animate**: for every step in order, overwrite the field's glyph state, rasterize it on
//!    the CPU and push the frame to a [`FrameSink`].
//! 4. **Encode**: [`FfmpegSink`] streams frames to the system `ffmpeg` binary for MP4 output.
//!
//! Rendering needs every step to hold exactly the agents of step 0; the first violation
//! surfaces as [`FlockError::SparsePopulation`]. [`Trajectory::densify`] checks the whole tensor
//! up front.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod encode;
mod foundation;
mod render;
mod trajectory;

pub use config::RenderOpts;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, Fps, FrameIndex, Point, Vec2};
pub use foundation::error::{FlockError, FlockResult};
pub use render::field::{Glyph, VectorField, Viewport};
pub use render::frame::FrameRGBA;
pub use render::pipeline::{RenderStats, artifact_path, render_into, render_still, render_to_mp4};
pub use render::raster::FieldRasterizer;
pub use trajectory::dense::DenseTrajectory;
pub use trajectory::loader::{AgentState, LoadStats, StepCount, Trajectory};
pub use trajectory::record::{Record, parse_record};
