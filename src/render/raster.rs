use crate::config::RenderOpts;
use crate::foundation::core::Point;
use crate::foundation::error::{FlockError, FlockResult};
use crate::render::field::VectorField;
use crate::render::frame::FrameRGBA;
use vello_cpu::kurbo::{Affine, BezPath, Rect};
use vello_cpu::peniko::Color;

// Plot area inset on every side, as a fraction of the canvas.
const PLOT_INSET_FRAC: f64 = 0.1;

// Head geometry in shaft widths.
const HEAD_LENGTH: f64 = 5.0;
const HEAD_AXIS_LENGTH: f64 = 4.5;
const HEAD_WIDTH: f64 = 3.0;

/// CPU rasterizer for a [`VectorField`], backed by `vello_cpu`.
pub struct FieldRasterizer {
    width: u16,
    height: u16,
    background: Color,
    arrow: Color,
    frame: Color,
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: vello_cpu::Pixmap,
}

impl FieldRasterizer {
    /// Create a rasterizer for the canvas and colors in `opts`.
    pub fn new(opts: &RenderOpts) -> FlockResult<Self> {
        opts.validate()?;
        let width: u16 = opts
            .canvas
            .width
            .try_into()
            .map_err(|_| FlockError::validation("canvas width exceeds u16"))?;
        let height: u16 = opts
            .canvas
            .height
            .try_into()
            .map_err(|_| FlockError::validation("canvas height exceeds u16"))?;

        Ok(Self {
            width,
            height,
            background: color(opts.background_rgba),
            arrow: color(opts.arrow_rgba),
            frame: color(opts.frame_rgba),
            ctx: None,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    fn plot_rect(&self) -> Rect {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        Rect::new(
            w * PLOT_INSET_FRAC,
            h * PLOT_INSET_FRAC,
            w * (1.0 - PLOT_INSET_FRAC),
            h * (1.0 - PLOT_INSET_FRAC),
        )
    }

    /// Rasterize the field's current glyphs into a new frame.
    pub fn draw(&mut self, field: &VectorField) -> FlockResult<FrameRGBA> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == self.width && ctx.height() == self.height => ctx,
            _ => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();

        ctx.set_transform(Affine::IDENTITY);
        ctx.set_paint(self.background);
        ctx.fill_rect(&Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        let plot = self.plot_rect();
        self.draw_axes(&mut ctx, plot);

        let viewport = field.viewport();
        let shaft = field.shaft_width() * plot.width();
        ctx.set_paint(self.arrow);
        for glyph in field.glyphs() {
            let unit = viewport.to_unit(glyph.tail);
            let tail = Point::new(
                plot.x0 + unit.x * plot.width(),
                plot.y0 + unit.y * plot.height(),
            );
            if !(tail.x.is_finite() && tail.y.is_finite()) {
                continue;
            }
            let length = field.arrow_length(glyph.vector) * plot.width();
            let Some(path) = arrow_path(length, shaft) else {
                continue;
            };

            // Screen y grows downward.
            let angle = (-glyph.vector.y).atan2(glyph.vector.x);
            ctx.set_transform(Affine::translate((tail.x, tail.y)) * Affine::rotate(angle));
            ctx.fill_path(&path);
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
        })
    }

    fn draw_axes(&self, ctx: &mut vello_cpu::RenderContext, plot: Rect) {
        let t = (f64::from(self.width) * 0.001).max(1.0);
        ctx.set_transform(Affine::IDENTITY);
        ctx.set_paint(self.frame);
        ctx.fill_rect(&Rect::new(plot.x0 - t, plot.y0 - t, plot.x1 + t, plot.y0));
        ctx.fill_rect(&Rect::new(plot.x0 - t, plot.y1, plot.x1 + t, plot.y1 + t));
        ctx.fill_rect(&Rect::new(plot.x0 - t, plot.y0, plot.x0, plot.y1));
        ctx.fill_rect(&Rect::new(plot.x1, plot.y0, plot.x1 + t, plot.y1));
    }
}

fn color(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Arrow outline along +x with its tail at the origin. Short arrows shrink as a whole.
fn arrow_path(length: f64, shaft: f64) -> Option<BezPath> {
    if !(length.is_finite() && length > 0.0 && shaft > 0.0) {
        return None;
    }

    let mut k = 1.0;
    if length < HEAD_LENGTH * shaft {
        k = length / (HEAD_LENGTH * shaft);
    }
    let sw = 0.5 * shaft * k;
    let hl = HEAD_LENGTH * shaft * k;
    let hal = HEAD_AXIS_LENGTH * shaft * k;
    let hw = 0.5 * HEAD_WIDTH * shaft * k;

    let mut path = BezPath::new();
    path.move_to((0.0, -sw));
    path.line_to((length - hal, -sw));
    path.line_to((length - hl, -hw));
    path.line_to((length, 0.0));
    path.line_to((length - hl, hw));
    path.line_to((length - hal, sw));
    path.line_to((0.0, sw));
    path.close_path();
    Some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
