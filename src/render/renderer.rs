use tracing::{debug, trace};

use crate::animation::state::AnimationState;
use crate::foundation::core::{Color, Rect, Size};
use crate::foundation::error::{EmbuiError, EmbuiResult};
use crate::render::format::{PixelFormat, pack_rgb565};
use crate::render::framebuffer::Framebuffer;
use crate::scene::graph::{NodeId, SceneGraph};
use crate::scene::shape::{NodeKind, Shape};

/// Counters for one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Shapes that reached the fill loop, including fully clipped ones.
    pub shapes_drawn: u64,
    /// Shapes skipped as invisible or not fully opaque.
    pub shapes_skipped: u64,
    pub images_skipped: u64,
    pub pixels_written: u64,
}

enum ShapeOutcome {
    Drawn(u64),
    Skipped,
}

/// Software rasterizer bound to one framebuffer.
///
/// The renderer only remembers the id of the list head; the scene arena and the animation
/// states are passed to every [`Renderer::run`].
#[derive(Debug)]
pub struct Renderer<'fb> {
    framebuffer: Framebuffer<'fb>,
    active_area: Option<Rect>,
    root: Option<NodeId>,
}

impl<'fb> Renderer<'fb> {
    pub fn new(framebuffer: Framebuffer<'fb>) -> Self {
        Self {
            framebuffer,
            active_area: None,
            root: None,
        }
    }

    /// Reset traversal state. The framebuffer is left untouched.
    pub fn init(&mut self) -> EmbuiResult<()> {
        self.root = None;
        Ok(())
    }

    pub fn set_root(&mut self, root: NodeId) -> EmbuiResult<()> {
        self.root = Some(root);
        Ok(())
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Restrict drawing to `area` intersected with the framebuffer. Coordinates are not
    /// translated; `None` clips to the full buffer.
    pub fn set_active_area(&mut self, area: Option<Rect>) {
        self.active_area = area;
    }

    pub fn active_area(&self) -> Option<Rect> {
        self.active_area
    }

    pub fn format(&self) -> PixelFormat {
        self.framebuffer.format()
    }

    pub fn size(&self) -> Size {
        self.framebuffer.size()
    }

    pub fn framebuffer(&self) -> &Framebuffer<'fb> {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<'fb> {
        &mut self.framebuffer
    }

    /// Paint every node of the list rooted at [`Renderer::set_root`], head to tail.
    ///
    /// Later nodes paint over earlier ones. With no root set this is a no-op.
    ///
    /// # Panics
    ///
    /// When a shape reaches the rasterizer and the framebuffer format is not
    /// [`PixelFormat::Rgb565`].
    #[tracing::instrument(skip_all)]
    pub fn run(
        &mut self,
        scene: &SceneGraph,
        states: &[AnimationState],
    ) -> EmbuiResult<RenderStats> {
        let mut stats = RenderStats::default();
        let Some(root) = self.root else {
            return Ok(stats);
        };
        if scene.get(root).is_none() {
            return Err(EmbuiError::scene(format!("renderer root {} is unknown", root.0)));
        }

        for (id, node) in scene.iter_from(root) {
            match &node.kind {
                NodeKind::Shape(shape) => match self.render_shape(scene, states, shape)? {
                    ShapeOutcome::Drawn(px) => {
                        stats.shapes_drawn += 1;
                        stats.pixels_written += px;
                    }
                    ShapeOutcome::Skipped => {
                        trace!(node = id.0, "shape skipped");
                        stats.shapes_skipped += 1;
                    }
                },
                NodeKind::Image(_) => {
                    trace!(node = id.0, "image blit not supported, skipping");
                    stats.images_skipped += 1;
                }
            }
        }

        debug!(
            drawn = stats.shapes_drawn,
            skipped = stats.shapes_skipped,
            pixels = stats.pixels_written,
            "render pass done"
        );
        Ok(stats)
    }

    fn render_shape(
        &mut self,
        scene: &SceneGraph,
        states: &[AnimationState],
        shape: &Shape,
    ) -> EmbuiResult<ShapeOutcome> {
        if !shape.visible {
            return Ok(ShapeOutcome::Skipped);
        }

        let mut rect = shape.rect;
        scene
            .rect_animators
            .apply(shape.rect_animator, states, &mut rect)?;

        let mut color = shape.color;
        scene
            .color_animators
            .apply(shape.color_animator, states, &mut color)?;

        match self.framebuffer.format() {
            PixelFormat::Rgb565 => self.raster_rgb565(color, rect),
            other => panic!("unhandled pixel format {other:?}"),
        }
    }

    fn raster_rgb565(&mut self, color: Color, rect: Rect) -> EmbuiResult<ShapeOutcome> {
        if !color.is_opaque() {
            return Ok(ShapeOutcome::Skipped);
        }

        let mut clip = self.framebuffer.bounds();
        if let Some(area) = self.active_area {
            clip = clip.intersect(area.span());
        }
        let span = rect.span().intersect(clip);
        let written = self.framebuffer.fill_span_rgb565(span, pack_rgb565(color))?;
        Ok(ShapeOutcome::Drawn(written))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
