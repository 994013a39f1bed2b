pub(crate) mod ease;
pub(crate) mod node;
pub(crate) mod state;
