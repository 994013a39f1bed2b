//! Scene model: an arena of drawable nodes linked into a draw list, and its JSON description.

pub(crate) mod def;
pub(crate) mod graph;
pub(crate) mod link;
pub(crate) mod shape;
