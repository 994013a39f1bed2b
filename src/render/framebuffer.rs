use crate::foundation::core::{Size, Span};
use crate::foundation::error::{EmbuiError, EmbuiResult};
use crate::render::format::{PixelFormat, unpack_rgb565};

/// Caller-owned pixel memory with a declared format and size.
///
/// The slice length is checked against the declared size once, at construction; every write goes
/// through slice indexing afterwards. RGB565 pixels are stored in native byte order, matching a
/// `u16` framebuffer.
#[derive(Debug)]
pub struct Framebuffer<'a> {
    data: &'a mut [u8],
    format: PixelFormat,
    size: Size,
}

impl<'a> Framebuffer<'a> {
    pub fn new(data: &'a mut [u8], format: PixelFormat, size: Size) -> EmbuiResult<Self> {
        let needed = format.buffer_len(size)?;
        if data.len() < needed {
            return Err(EmbuiError::validation(format!(
                "framebuffer holds {} bytes, {}x{} {:?} needs {needed}",
                data.len(),
                size.width,
                size.height,
                format
            )));
        }
        Ok(Self { data, format, size })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    /// Full-buffer span `[0, width) x [0, height)`.
    pub fn bounds(&self) -> Span {
        Span {
            x0: 0,
            y0: 0,
            x1: i64::from(self.size.width),
            y1: i64::from(self.size.height),
        }
    }

    fn rgb565_offset(&self, x: i32, y: i32) -> EmbuiResult<usize> {
        if self.format != PixelFormat::Rgb565 {
            return Err(EmbuiError::validation(format!(
                "framebuffer format is {:?}, not Rgb565",
                self.format
            )));
        }
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return Err(EmbuiError::validation(format!(
                "pixel ({x}, {y}) is outside {}x{}",
                self.size.width, self.size.height
            )));
        }
        Ok(((y as usize) * (self.size.width as usize) + (x as usize)) * 2)
    }

    pub fn pixel_rgb565(&self, x: i32, y: i32) -> EmbuiResult<u16> {
        let off = self.rgb565_offset(x, y)?;
        Ok(u16::from_ne_bytes([self.data[off], self.data[off + 1]]))
    }

    pub fn fill_rgb565(&mut self, px: u16) -> EmbuiResult<()> {
        let span = self.bounds();
        self.fill_span_rgb565(span, px).map(|_| ())
    }

    /// Fill an already-clipped span row by row, `row * stride + col` with stride = width.
    /// Returns the number of pixels written.
    pub(crate) fn fill_span_rgb565(&mut self, span: Span, px: u16) -> EmbuiResult<u64> {
        let span = span.intersect(self.bounds());
        if span.is_empty() {
            return Ok(0);
        }
        if self.format != PixelFormat::Rgb565 {
            return Err(EmbuiError::validation(format!(
                "framebuffer format is {:?}, not Rgb565",
                self.format
            )));
        }
        let bytes = px.to_ne_bytes();
        let stride = self.size.width as usize;
        let (x0, x1) = (span.x0 as usize, span.x1 as usize);
        for y in span.y0 as usize..span.y1 as usize {
            let row = &mut self.data[(y * stride + x0) * 2..(y * stride + x1) * 2];
            for dst in row.chunks_exact_mut(2) {
                dst.copy_from_slice(&bytes);
            }
        }
        Ok(span.area())
    }

    /// Straight RGBA8 copy of an RGB565 buffer, row-major.
    pub fn to_rgba8(&self) -> EmbuiResult<Vec<u8>> {
        if self.format != PixelFormat::Rgb565 {
            return Err(EmbuiError::validation(format!(
                "cannot convert {:?} framebuffer to RGBA8",
                self.format
            )));
        }
        let n = self.size.area()?;
        let mut out = Vec::with_capacity(n * 4);
        for px in self.data[..n * 2].chunks_exact(2) {
            let c = unpack_rgb565(u16::from_ne_bytes([px[0], px[1]]));
            out.extend_from_slice(&c.to_bytes());
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/framebuffer.rs"]
mod tests;
