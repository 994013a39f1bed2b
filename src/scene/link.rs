//! Index-based list links shared by scene nodes and animator chains.
//!
//! Links are arena indices instead of pointers. Only `next` is followed by traversal; `prev` is
//! kept consistent so a node with neither link set is known to belong to no list.

use crate::foundation::error::{EmbuiError, EmbuiResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) prev: Option<u32>,
    pub(crate) next: Option<u32>,
}

impl Link {
    pub(crate) fn is_detached(self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

pub(crate) trait Linked {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;
}

fn check<N>(nodes: &[N], idx: u32, what: &str) -> EmbuiResult<usize> {
    let i = idx as usize;
    if i >= nodes.len() {
        return Err(EmbuiError::scene(format!(
            "unknown {what} {idx} (arena holds {})",
            nodes.len()
        )));
    }
    Ok(i)
}

/// Splice `node` directly after `anchor`. `node` must not be linked into any list.
pub(crate) fn splice_after<N: Linked>(
    nodes: &mut [N],
    anchor: u32,
    node: u32,
    what: &str,
) -> EmbuiResult<()> {
    let a = check(nodes, anchor, what)?;
    let n = check(nodes, node, what)?;
    if a == n {
        return Err(EmbuiError::scene(format!(
            "cannot splice {what} {node} after itself"
        )));
    }
    if !nodes[n].link().is_detached() {
        return Err(EmbuiError::scene(format!(
            "{what} {node} is already linked into a list"
        )));
    }

    let old_next = nodes[a].link().next;
    nodes[a].link_mut().next = Some(node);
    *nodes[n].link_mut() = Link {
        prev: Some(anchor),
        next: old_next,
    };
    if let Some(next) = old_next {
        nodes[next as usize].link_mut().prev = Some(node);
    }
    Ok(())
}

/// Walk `next` links from `start` and splice `node` after the tail. O(list length).
pub(crate) fn append<N: Linked>(
    nodes: &mut [N],
    start: u32,
    node: u32,
    what: &str,
) -> EmbuiResult<()> {
    let mut tail = check(nodes, start, what)? as u32;
    while let Some(next) = nodes[tail as usize].link().next {
        tail = next;
    }
    splice_after(nodes, tail, node, what)
}

/// Iterator over arena indices following `next` links.
pub(crate) struct Walk<'a, N> {
    nodes: &'a [N],
    cur: Option<u32>,
}

impl<'a, N: Linked> Walk<'a, N> {
    pub(crate) fn new(nodes: &'a [N], start: Option<u32>) -> Self {
        Self { nodes, cur: start }
    }
}

impl<'a, N: Linked> Iterator for Walk<'a, N> {
    type Item = (u32, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        let node = self.nodes.get(idx as usize)?;
        self.cur = node.link().next;
        Some((idx, node))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/link.rs"]
mod tests;
