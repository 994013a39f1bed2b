//! JSON scene descriptions.
//!
//! A [`SceneDef`] is the human-edited form of a scene: framebuffer geometry, animation states and
//! an ordered node list. [`SceneDef::build`] turns it into the arena-backed runtime objects.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::animation::node::{ColorTransform, RectTransform};
use crate::animation::state::{AnimationState, StateId};
use crate::foundation::core::{Channel, Color, Rect, Size};
use crate::foundation::error::{EmbuiError, EmbuiResult};
use crate::render::format::PixelFormat;
use crate::render::framebuffer::Framebuffer;
use crate::render::renderer::Renderer;
use crate::scene::graph::{NodeId, SceneGraph};
use crate::scene::shape::{AssetRef, Image, NodeKind, Shape};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    pub framebuffer: FramebufferDef,
    #[serde(default)]
    pub active_area: Option<RectDef>,
    /// Filled before every frame when set.
    #[serde(default)]
    pub clear: Option<ColorDef>,
    #[serde(default)]
    pub states: Vec<StateDef>,
    /// Draw order, first to last.
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FramebufferDef {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_format")]
    pub format: PixelFormat,
}

fn default_format() -> PixelFormat {
    PixelFormat::Rgb565
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectDef {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<RectDef> for Rect {
    fn from(r: RectDef) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StateDef {
    /// Milliseconds; negative plays in reverse.
    pub duration: f32,
    #[serde(default)]
    pub repeat_count: i32,
    #[serde(default = "yes")]
    pub running: bool,
    #[serde(default)]
    pub offset: f32,
    #[serde(default)]
    pub ease: Ease,
}

impl StateDef {
    fn to_state(self) -> EmbuiResult<AnimationState> {
        let mut state = AnimationState::new(self.duration)?
            .with_repeat(self.repeat_count)
            .with_ease(self.ease)
            .with_offset(self.offset);
        state.running = self.running;
        Ok(state)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDef {
    Shape(ShapeDef),
    Image(ImageDef),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeDef {
    pub rect: RectDef,
    pub color: ColorDef,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default)]
    pub rect_animators: Vec<RectAnimatorDef>,
    #[serde(default)]
    pub color_animators: Vec<ColorAnimatorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDef {
    pub rect: RectDef,
    pub format: PixelFormat,
    pub asset_size: Size,
    pub source_rect: RectDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RectAnimatorDef {
    Slide {
        state: u32,
        #[serde(default)]
        offset: f32,
        step: f32,
    },
    Orbit {
        state: u32,
        radius: f32,
        #[serde(default)]
        phase: f32,
    },
}

impl RectAnimatorDef {
    fn state(self) -> u32 {
        match self {
            Self::Slide { state, .. } | Self::Orbit { state, .. } => state,
        }
    }

    fn transform(self) -> RectTransform {
        match self {
            Self::Slide { offset, step, .. } => RectTransform::Slide { offset, step },
            Self::Orbit { radius, phase, .. } => RectTransform::Orbit { radius, phase },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorAnimatorDef {
    Channel {
        state: u32,
        channel: Channel,
        scale: f32,
    },
}

impl ColorAnimatorDef {
    fn state(self) -> u32 {
        match self {
            Self::Channel { state, .. } => state,
        }
    }

    fn transform(self) -> ColorTransform {
        match self {
            Self::Channel { channel, scale, .. } => ColorTransform::Channel { channel, scale },
        }
    }
}

/// 8-bit RGBA color as written in scene files.
///
/// Accepts `"#RRGGBB"`, `"#RRGGBBAA"`, `[r, g, b]`, `[r, g, b, a]` or `{r, g, b, a?}`. Missing
/// alpha is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorDef(pub Color);

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            Color::OPAQUE
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map(Self).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self(Color::rgba(r, g, b, a))),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self(Color::opaque(*r, *g, *b))),
                [r, g, b, a] => Ok(Self(Color::rgba(*r, *g, *b, *a))),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }
    match s.len() {
        6 => Ok(Color::opaque(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Runtime objects built from a [`SceneDef`].
#[derive(Debug, Clone)]
pub struct Scene {
    pub graph: SceneGraph,
    pub states: Vec<AnimationState>,
    /// Head of the draw list; `None` for a scene without nodes.
    pub root: Option<NodeId>,
    pub format: PixelFormat,
    pub size: Size,
    pub active_area: Option<Rect>,
    pub clear: Option<Color>,
}

impl Scene {
    /// Zeroed pixel memory sized for this scene's framebuffer.
    pub fn alloc_framebuffer(&self) -> EmbuiResult<Vec<u8>> {
        Ok(vec![0u8; self.format.buffer_len(self.size)?])
    }

    /// A renderer over `data`, rooted at this scene's draw list.
    pub fn renderer<'fb>(&self, data: &'fb mut [u8]) -> EmbuiResult<Renderer<'fb>> {
        let fb = Framebuffer::new(data, self.format, self.size)?;
        let mut renderer = Renderer::new(fb);
        renderer.init()?;
        if let Some(root) = self.root {
            renderer.set_root(root)?;
        }
        renderer.set_active_area(self.active_area);
        Ok(renderer)
    }
}

impl SceneDef {
    pub fn from_reader<R: std::io::Read>(r: R) -> EmbuiResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| EmbuiError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> EmbuiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EmbuiError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> EmbuiResult<()> {
        let size = Size::new(self.framebuffer.width, self.framebuffer.height);
        self.framebuffer.format.buffer_len(size)?;
        if self.clear.is_some() && self.framebuffer.format != PixelFormat::Rgb565 {
            return Err(EmbuiError::validation(
                "clear color requires an rgb565 framebuffer",
            ));
        }

        for (i, state) in self.states.iter().enumerate() {
            if !state.duration.is_finite() || state.duration == 0.0 {
                return Err(EmbuiError::validation(format!(
                    "states[{i}].duration must be finite and non-zero"
                )));
            }
        }

        let n_states = self.states.len();
        let check_state = |node: usize, state: u32| -> EmbuiResult<()> {
            if state as usize >= n_states {
                return Err(EmbuiError::validation(format!(
                    "nodes[{node}] animator references state {state}, only {n_states} defined"
                )));
            }
            Ok(())
        };
        for (i, node) in self.nodes.iter().enumerate() {
            if let NodeDef::Shape(shape) = node {
                for a in &shape.rect_animators {
                    check_state(i, a.state())?;
                }
                for a in &shape.color_animators {
                    check_state(i, a.state())?;
                }
            }
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> EmbuiResult<Scene> {
        self.validate()?;

        let states = self
            .states
            .iter()
            .map(|s| s.to_state())
            .collect::<EmbuiResult<Vec<_>>>()?;

        let mut graph = SceneGraph::new();
        let mut root = None;
        let mut tail: Option<NodeId> = None;
        for node in &self.nodes {
            let kind = match node {
                NodeDef::Shape(def) => NodeKind::Shape(build_shape(&mut graph, def)?),
                NodeDef::Image(def) => NodeKind::Image(Image {
                    shape: Shape::new(
                        def.rect.x,
                        def.rect.y,
                        def.rect.width,
                        def.rect.height,
                        Color::default(),
                    ),
                    asset: AssetRef {
                        format: def.format,
                        size: def.asset_size,
                        source_rect: def.source_rect.into(),
                    },
                }),
            };
            let id = graph.add(kind);
            match tail {
                Some(prev) => graph.insert(prev, id)?,
                None => root = Some(id),
            }
            tail = Some(id);
        }

        tracing::debug!(nodes = graph.len(), states = states.len(), "scene built");
        Ok(Scene {
            graph,
            states,
            root,
            format: self.framebuffer.format,
            size: Size::new(self.framebuffer.width, self.framebuffer.height),
            active_area: self.active_area.map(Rect::from),
            clear: self.clear.map(|c| c.0),
        })
    }
}

fn build_shape(graph: &mut SceneGraph, def: &ShapeDef) -> EmbuiResult<Shape> {
    let r = def.rect;
    let mut shape = Shape::new(r.x, r.y, r.width, r.height, def.color.0);
    shape.visible = def.visible;

    for a in &def.rect_animators {
        let id = graph.rect_animators.add(StateId(a.state()), a.transform());
        match shape.rect_animator {
            Some(head) => graph.rect_animators.add_last(head, id)?,
            None => shape.rect_animator = Some(id),
        }
    }
    for a in &def.color_animators {
        let id = graph.color_animators.add(StateId(a.state()), a.transform());
        match shape.color_animator {
            Some(head) => graph.color_animators.add_last(head, id)?,
            None => shape.color_animator = Some(id),
        }
    }
    Ok(shape)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/def.rs"]
mod tests;
