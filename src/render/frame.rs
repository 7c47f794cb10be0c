use crate::foundation::error::{FlockError, FlockResult};
use crate::foundation::math::mul_div255_u16;

/// A rendered frame as premultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Composite over `bg_rgba` (straight alpha, its own alpha ignored) into opaque RGBA8.
    pub fn flatten_into(&self, dst: &mut [u8], bg_rgba: [u8; 4]) -> FlockResult<()> {
        if dst.len() != self.data.len() || !dst.len().is_multiple_of(4) {
            return Err(FlockError::validation(
                "flatten expects equal-length rgba8 buffers",
            ));
        }

        let [bg_r, bg_g, bg_b, _] = bg_rgba.map(u16::from);
        for (d, s) in dst.chunks_exact_mut(4).zip(self.data.chunks_exact(4)) {
            let a = u16::from(s[3]);
            if a == 255 {
                d.copy_from_slice(s);
                continue;
            }

            let inv = 255 - a;
            let over = |c: u8, bg: u16| (u16::from(c) + mul_div255_u16(bg, inv)).min(255) as u8;
            d[0] = over(s[0], bg_r);
            d[1] = over(s[1], bg_g);
            d[2] = over(s[2], bg_b);
            d[3] = 255;
        }
        Ok(())
    }

    /// Opaque straight-alpha copy composited over `bg_rgba`, as written to image files.
    pub fn to_opaque_rgba8(&self, bg_rgba: [u8; 4]) -> FlockResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        self.flatten_into(&mut out, bg_rgba)?;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
