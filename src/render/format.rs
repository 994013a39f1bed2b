use crate::foundation::core::{Color, Size};
use crate::foundation::error::{EmbuiError, EmbuiResult};

/// Destination pixel formats. Discriminants are stable identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PixelFormat {
    /// 1 bit per pixel.
    Mono1 = 1,
    /// 16 bits per pixel, 5-6-5.
    Rgb565 = 2,
    /// 32 bits per pixel.
    Rgba8888 = 3,
}

impl PixelFormat {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> EmbuiResult<Self> {
        match id {
            1 => Ok(Self::Mono1),
            2 => Ok(Self::Rgb565),
            3 => Ok(Self::Rgba8888),
            _ => Err(EmbuiError::validation(format!("unknown pixel format id {id}"))),
        }
    }

    pub fn bits_per_pixel(self) -> usize {
        match self {
            Self::Mono1 => 1,
            Self::Rgb565 => 16,
            Self::Rgba8888 => 32,
        }
    }

    /// Bytes a framebuffer of `size` needs in this format.
    pub fn buffer_len(self, size: Size) -> EmbuiResult<usize> {
        let bits = size
            .area()?
            .checked_mul(self.bits_per_pixel())
            .ok_or_else(|| EmbuiError::validation("framebuffer size overflows"))?;
        Ok(bits.div_ceil(8))
    }

    /// Whether the rasterizer can target this format.
    pub fn is_rasterizable(self) -> bool {
        matches!(self, Self::Rgb565)
    }
}

/// 8-bit RGB to 5-6-5 by truncation.
pub const fn pack_rgb565(color: Color) -> u16 {
    (((color.r & 0xf8) as u16) << 8) | (((color.g & 0xfc) as u16) << 3) | ((color.b as u16) >> 3)
}

/// 5-6-5 back to opaque 8-bit RGBA, replicating high bits into the low ones.
pub const fn unpack_rgb565(px: u16) -> Color {
    let r5 = ((px >> 11) & 0x1f) as u8;
    let g6 = ((px >> 5) & 0x3f) as u8;
    let b5 = (px & 0x1f) as u8;
    Color::opaque(
        (r5 << 3) | (r5 >> 2),
        (g6 << 2) | (g6 >> 4),
        (b5 << 3) | (b5 >> 2),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/format.rs"]
mod tests;
