use crate::animation::node::{AnimatorPool, ColorTransform, RectTransform};
use crate::foundation::error::{EmbuiError, EmbuiResult};
use crate::scene::link::{self, Link, Linked, Walk};
use crate::scene::shape::{Image, NodeKind, Shape};

/// Stable index of a node in a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug)]
pub struct SceneNode {
    link: Link,
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn next(&self) -> Option<NodeId> {
        self.link.next.map(NodeId)
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.link.prev.map(NodeId)
    }
}

impl Linked for SceneNode {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

/// Arena owning every drawable node and animator chain of a scene.
///
/// Nodes are never removed, so ids stay valid for the graph's lifetime. Draw order is the
/// `next` order of the list a renderer is rooted at.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    pub rect_animators: AnimatorPool<RectTransform>,
    pub color_animators: AnimatorPool<ColorTransform>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node.
    pub fn add(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            link: Link::default(),
            kind,
        });
        id
    }

    pub fn add_shape(&mut self, shape: Shape) -> NodeId {
        self.add(NodeKind::Shape(shape))
    }

    pub fn add_image(&mut self, image: Image) -> NodeId {
        self.add(NodeKind::Image(image))
    }

    /// Splice `node` immediately after `anchor`. O(1).
    pub fn insert(&mut self, anchor: NodeId, node: NodeId) -> EmbuiResult<()> {
        link::splice_after(&mut self.nodes, anchor.0, node.0, "node")
    }

    /// Append `node` after the tail of the list containing `anchor`. O(list length).
    pub fn add_last(&mut self, anchor: NodeId, node: NodeId) -> EmbuiResult<()> {
        link::append(&mut self.nodes, anchor.0, node.0, "node")
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn shape_mut(&mut self, id: NodeId) -> EmbuiResult<&mut Shape> {
        match self.nodes.get_mut(id.0 as usize).map(|n| &mut n.kind) {
            Some(NodeKind::Shape(shape)) | Some(NodeKind::Image(Image { shape, .. })) => Ok(shape),
            None => Err(EmbuiError::scene(format!("unknown node {}", id.0))),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the list from `root` in draw order.
    pub fn iter_from(&self, root: NodeId) -> impl Iterator<Item = (NodeId, &SceneNode)> + '_ {
        Walk::new(&self.nodes, Some(root.0)).map(|(i, n)| (NodeId(i), n))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
