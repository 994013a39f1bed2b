use crate::animation::node::{AnimatorId, ColorTransform, RectTransform};
use crate::foundation::core::{Color, Rect, Size};
use crate::render::format::PixelFormat;

/// Type tag of a drawable node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NodeType {
    Shape = 1,
    Image = 2,
}

/// A filled rectangle with optional animator chains on its rect and color.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub visible: bool,
    pub rect: Rect,
    pub color: Color,
    pub rect_animator: Option<AnimatorId<RectTransform>>,
    pub color_animator: Option<AnimatorId<ColorTransform>>,
}

impl Shape {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            visible: true,
            rect: Rect::new(x, y, width, height),
            color,
            rect_animator: None,
            color_animator: None,
        }
    }

    pub fn with_rect_animator(mut self, head: AnimatorId<RectTransform>) -> Self {
        self.rect_animator = Some(head);
        self
    }

    pub fn with_color_animator(mut self, head: AnimatorId<ColorTransform>) -> Self {
        self.color_animator = Some(head);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Bitmap source description carried by an [`Image`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssetRef {
    pub format: PixelFormat,
    pub size: Size,
    pub source_rect: Rect,
}

/// Placeholder for bitmap blits. Accepted in the scene but never rasterized.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub shape: Shape,
    pub asset: AssetRef,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Shape(Shape),
    Image(Image),
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Shape(_) => NodeType::Shape,
            Self::Image(_) => NodeType::Image,
        }
    }
}
