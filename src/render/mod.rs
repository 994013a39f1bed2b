//! Pixel formats, the checked framebuffer handle and the rectangle rasterizer.

pub(crate) mod format;
pub(crate) mod framebuffer;
pub(crate) mod renderer;
