use std::sync::Arc;

use crate::aabb::Aabb;
use crate::wald::WaldTriangle;

/// One slot of the flat node pool.
#[derive(Clone, Debug)]
pub struct Node {
    pub bounds: Aabb,
    pub kind: NodeKind,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    /// Interior node. The two children occupy the adjacent slots
    /// `id + left_offset` and `id + left_offset + 1`.
    Inner { axis: u8, left_offset: u32 },
    /// Run of `count` records starting at `first` in `Intersector::triangles`.
    TriLeaf { first: u32, count: u32 },
    /// A nested, already-built tree entered as a whole.
    SubTree { tree: Arc<Intersector> },
}

impl Default for Node {
    fn default() -> Self {
        Node {
            bounds: Aabb::empty(),
            kind: NodeKind::TriLeaf { first: 0, count: 0 },
        }
    }
}

/// The built acceleration structure: a node pool in emission order (slot 0 is
/// the root) and the Wald triangle records the leaves point into. Immutable
/// once returned by [`create`](crate::create), so it can be shared freely
/// across traversal threads.
#[derive(Debug)]
pub struct Intersector {
    pub nodes: Vec<Node>,
    pub triangles: Vec<WaldTriangle>,
}
