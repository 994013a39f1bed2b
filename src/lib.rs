//! embui is a retained-mode rendering engine for small, fixed framebuffers.
//!
//! A [`SceneGraph`] holds rectangles ([`Shape`]) linked into a draw list; a [`Renderer`] walks
//! that list and fills each opaque shape straight into caller-owned RGB565 memory; a [`Context`]
//! advances every [`AnimationState`] once per tick before rendering, and [`AnimatorPool`] chains
//! bound to those states perturb each shape's rect and color on a per-frame working copy.
//!
//! # Frame pipeline
//!
//! 1. **Tick**: every registered [`AnimationState`] integrates a time step and re-eases its value.
//! 2. **Animate**: each shape's rect and color chains are applied to copies of its stored values.
//! 3. **Rasterize**: opaque shapes are clipped to the framebuffer (and optional active area) and
//!    packed to 5-6-5.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No allocation while rendering**: a render pass only writes into the borrowed buffer.
//! - **Binary alpha**: only fully opaque colors are drawn; there is no blending.
//! - **Fatal format faults**: a shape reaching the rasterizer with a non-RGB565 target panics.
#![forbid(unsafe_code)]

mod animation;
mod engine;
mod foundation;
mod render;
mod scene;

pub use animation::ease::{Ease, ease_in, ease_in_out, ease_out};
pub use animation::node::{
    Animate, AnimationNode, AnimatorId, AnimatorPool, ColorTransform, RectTransform,
};
pub use animation::state::{AnimationState, FRAME_INTERVAL_MS, StateId};
pub use engine::clock::FrameClock;
pub use engine::context::Context;
pub use foundation::core::{Channel, Color, Pos, Rect, Size, Span};
pub use foundation::error::{EmbuiError, EmbuiResult};
pub use render::format::{PixelFormat, pack_rgb565, unpack_rgb565};
pub use render::framebuffer::Framebuffer;
pub use render::renderer::{RenderStats, Renderer};
pub use scene::def::{
    ColorAnimatorDef, ColorDef, FramebufferDef, ImageDef, NodeDef, RectAnimatorDef, RectDef,
    Scene, SceneDef, ShapeDef, StateDef,
};
pub use scene::graph::{NodeId, SceneGraph, SceneNode};
pub use scene::shape::{AssetRef, Image, NodeKind, NodeType, Shape};
