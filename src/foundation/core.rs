use crate::foundation::error::{EmbuiError, EmbuiResult};

/// Position in destination pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Pixel count, or an error when either dimension is not positive or the product overflows.
    pub fn area(self) -> EmbuiResult<usize> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EmbuiError::validation(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| EmbuiError::validation("framebuffer size overflows"))
    }
}

/// Axis-aligned rectangle. Width or height <= 0 is an empty rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub pos: Pos,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: Pos { x, y },
            size: Size { width, height },
        }
    }

    /// Half-open span `[x0, x1) x [y0, y1)` in i64 so edges never overflow.
    pub fn span(self) -> Span {
        let x0 = i64::from(self.pos.x);
        let y0 = i64::from(self.pos.y);
        Span {
            x0,
            y0,
            x1: x0 + i64::from(self.size.width.max(0)),
            y1: y0 + i64::from(self.size.height.max(0)),
        }
    }
}

/// Half-open integer span used by the clipper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Span {
    pub fn intersect(self, other: Span) -> Span {
        Span {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    pub fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub fn area(self) -> u64 {
        if self.is_empty() {
            0
        } else {
            ((self.x1 - self.x0) as u64) * ((self.y1 - self.y0) as u64)
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// The packed `u32` form stores the channels in `r, g, b, a` byte order, least significant byte
/// first, so `value()` and the channel fields always describe the same bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const OPAQUE: u8 = 0xff;

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, Self::OPAQUE)
    }

    pub const fn from_value(value: u32) -> Self {
        let [r, g, b, a] = value.to_le_bytes();
        Self { r, g, b, a }
    }

    pub const fn value(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Alpha is a binary gate: only exactly `0xff` is drawn.
    pub const fn is_opaque(self) -> bool {
        self.a == Self::OPAQUE
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::R => &mut self.r,
            Channel::G => &mut self.g,
            Channel::B => &mut self.b,
            Channel::A => &mut self.a,
        }
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_value(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.value()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    R,
    G,
    B,
    A,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
