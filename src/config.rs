use crate::encode::sink::SinkConfig;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FlockError, FlockResult};
use std::path::Path;

/// Rendering options. Every field is optional in JSON; defaults reproduce the reference output
/// (60 fps, 2400x2400, black arrows on white).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Playback rate of the output video.
    pub fps: Fps,
    /// Square output frame geometry.
    pub canvas: Canvas,
    /// Frame background (straight RGBA8).
    pub background_rgba: [u8; 4],
    /// Arrow fill (straight RGBA8).
    pub arrow_rgba: [u8; 4],
    /// Axes frame color (straight RGBA8).
    pub frame_rgba: [u8; 4],
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            background_rgba: [255, 255, 255, 255],
            arrow_rgba: [0, 0, 0, 255],
            frame_rgba: [0, 0, 0, 255],
            overwrite: true,
        }
    }
}

impl RenderOpts {
    /// Read options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FlockResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            FlockError::resource(format!("failed to open config '{}': {e}", path.display()))
        })?;
        let opts: Self = serde_json::from_reader(std::io::BufReader::new(f)).map_err(|e| {
            FlockError::validation(format!("invalid config '{}': {e}", path.display()))
        })?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check fps and frame geometry.
    pub fn validate(&self) -> FlockResult<()> {
        self.sink_config().validate()?;
        let Canvas { width, height } = self.canvas;
        if width != height {
            return Err(FlockError::validation(format!(
                "canvas must be square, got {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) {
            return Err(FlockError::validation(format!(
                "canvas size {width} exceeds {}",
                u16::MAX
            )));
        }
        Ok(())
    }

    /// Sink configuration for frames rendered with these options.
    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
