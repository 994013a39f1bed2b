use std::f32::consts::TAU;
use std::fmt;
use std::marker::PhantomData;

use crate::animation::state::{AnimationState, StateId};
use crate::foundation::core::{Channel, Color, Rect};
use crate::foundation::error::{EmbuiError, EmbuiResult};
use crate::scene::link::{self, Link, Linked, Walk};

/// A pure transform from an animation state's current value to an in-place field adjustment.
pub trait Animate {
    type Target;

    fn apply(&self, value: f32, target: &mut Self::Target);
}

/// Transforms applied to a shape's working rect.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RectTransform {
    /// `x += (value + offset) * step`
    Slide { offset: f32, step: f32 },
    /// Circular motion of `radius` pixels; `value` 0..1 is one revolution starting at `phase`.
    Orbit { radius: f32, phase: f32 },
    #[serde(skip)]
    Custom(fn(f32, &mut Rect)),
}

impl Animate for RectTransform {
    type Target = Rect;

    fn apply(&self, value: f32, rect: &mut Rect) {
        match *self {
            Self::Slide { offset, step } => {
                rect.pos.x = rect.pos.x.saturating_add(to_px((value + offset) * step));
            }
            Self::Orbit { radius, phase } => {
                let angle = TAU * value + phase;
                rect.pos.x = rect.pos.x.saturating_add(to_px(radius * angle.cos()));
                rect.pos.y = rect.pos.y.saturating_add(to_px(radius * angle.sin()));
            }
            Self::Custom(f) => f(value, rect),
        }
    }
}

/// Transforms applied to a shape's working color.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorTransform {
    /// `channel += value * scale`, saturating at the byte range.
    Channel { channel: Channel, scale: f32 },
    #[serde(skip)]
    Custom(fn(f32, &mut Color)),
}

impl Animate for ColorTransform {
    type Target = Color;

    fn apply(&self, value: f32, color: &mut Color) {
        match *self {
            Self::Channel { channel, scale } => {
                let c = color.channel_mut(channel);
                let shifted = i64::from(*c) + i64::from(to_px(value * scale));
                *c = shifted.clamp(0, 255) as u8;
            }
            Self::Custom(f) => f(value, color),
        }
    }
}

fn to_px(v: f32) -> i32 {
    // `as` saturates and maps NaN to 0
    v.round() as i32
}

/// Typed handle to a node in an [`AnimatorPool`].
pub struct AnimatorId<X> {
    index: u32,
    _marker: PhantomData<fn() -> X>,
}

impl<X> AnimatorId<X> {
    fn new(index: u32) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(self) -> u32 {
        self.index
    }
}

impl<X> Clone for AnimatorId<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X> Copy for AnimatorId<X> {}

impl<X> PartialEq for AnimatorId<X> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<X> Eq for AnimatorId<X> {}

impl<X> fmt::Debug for AnimatorId<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimatorId({})", self.index)
    }
}

/// A transform bound to one animation state, chainable after other nodes of the same kind.
#[derive(Clone, Debug)]
pub struct AnimationNode<X> {
    link: Link,
    pub transform: X,
    pub state: StateId,
}

impl<X> Linked for AnimationNode<X> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

/// Arena of animator chains for one target field type.
#[derive(Clone, Debug)]
pub struct AnimatorPool<X> {
    nodes: Vec<AnimationNode<X>>,
}

impl<X> Default for AnimatorPool<X> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<X: Animate> AnimatorPool<X> {
    pub fn add(&mut self, state: StateId, transform: X) -> AnimatorId<X> {
        let id = AnimatorId::new(self.nodes.len() as u32);
        self.nodes.push(AnimationNode {
            link: Link::default(),
            transform,
            state,
        });
        id
    }

    /// Splice `node` directly after `anchor`.
    pub fn insert(&mut self, anchor: AnimatorId<X>, node: AnimatorId<X>) -> EmbuiResult<()> {
        link::splice_after(&mut self.nodes, anchor.index, node.index, "animator")
    }

    /// Append `node` at the end of the chain containing `head`.
    pub fn add_last(&mut self, head: AnimatorId<X>, node: AnimatorId<X>) -> EmbuiResult<()> {
        link::append(&mut self.nodes, head.index, node.index, "animator")
    }

    pub fn get(&self, id: AnimatorId<X>) -> Option<&AnimationNode<X>> {
        self.nodes.get(id.index as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Chain members from `head` in link order.
    pub fn chain(&self, head: AnimatorId<X>) -> impl Iterator<Item = &AnimationNode<X>> + '_ {
        Walk::new(&self.nodes, Some(head.index)).map(|(_, node)| node)
    }

    /// Apply the chain starting at `head` to `target`, in link order.
    ///
    /// Each node sees the target as left by the previous one.
    pub fn apply(
        &self,
        head: Option<AnimatorId<X>>,
        states: &[AnimationState],
        target: &mut X::Target,
    ) -> EmbuiResult<()> {
        let Some(head) = head else {
            return Ok(());
        };
        if self.get(head).is_none() {
            return Err(EmbuiError::scene(format!(
                "unknown animator {}",
                head.index
            )));
        }
        for node in self.chain(head) {
            let state = states.get(node.state.0 as usize).ok_or_else(|| {
                EmbuiError::scene(format!(
                    "animator references unknown animation state {}",
                    node.state.0
                ))
            })?;
            node.transform.apply(state.value(), target);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/node.rs"]
mod tests;
