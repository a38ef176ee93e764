use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use common::Positioned;

mod insert;
mod quadrant;
mod query_circle;
mod stats;
mod traverse;

pub use quadrant::Quadrant;
pub use stats::QueryStats;

// Slot value for an absent child. The root lives at index 0 and can never be
// anybody's child, so 0 is free to use as the sentinel.
pub(crate) const NO_CHILD: u32 = 0;

pub(crate) struct Node<E> {
    pub(crate) anchor: E,
    // Anchor position captured at insert time; partitioning and membership
    // tests both use it, so later moves of the element cannot break the tree.
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) bounds: Rectangle,
    pub(crate) children: [u32; 4],
}

impl<E> Node<E> {
    fn new(anchor: E, x: f64, y: f64, bounds: Rectangle) -> Self {
        Self {
            anchor,
            x,
            y,
            bounds,
            children: [NO_CHILD; 4],
        }
    }

    #[inline(always)]
    fn is_leaf(&self) -> bool {
        self.children.iter().all(|&child| child == NO_CHILD)
    }
}

/// Point quadtree: every node is keyed on exactly one anchor element and
/// splits its region into four quadrants around that anchor's position.
///
/// Nodes live in a flat arena and refer to their children by index. There are
/// no parent links and no deletion; callers rebuild the tree when positions
/// change.
pub struct PointQuadtree<E> {
    bounds: Rectangle,
    nodes: Vec<Node<E>>,
}

impl<E> PointQuadtree<E> {
    /// Empty index covering `bounds`. The first inserted element becomes the
    /// root anchor.
    pub fn new(bounds: Rectangle) -> QuadtreeResult<Self> {
        validate_bounds(&bounds)?;
        Ok(Self {
            bounds,
            nodes: Vec::new(),
        })
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Root node, if anything has been inserted.
    pub fn root(&self) -> Option<NodeRef<'_, E>> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeRef { tree: self, idx: 0 })
        }
    }
}

impl<E: Positioned> PointQuadtree<E> {
    /// Single-node tree holding `anchor` over `bounds`.
    pub fn with_anchor(anchor: E, bounds: Rectangle) -> QuadtreeResult<Self> {
        let mut tree = Self::new(bounds)?;
        tree.insert(anchor)?;
        Ok(tree)
    }
}

fn validate_bounds(bounds: &Rectangle) -> QuadtreeResult<()> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(QuadtreeError::InvalidBounds {
            x1: bounds.x1,
            y1: bounds.y1,
            x2: bounds.x2,
            y2: bounds.y2,
        })
    }
}

/// Read-only view of one node, for diagnostics and tree inspection.
pub struct NodeRef<'a, E> {
    tree: &'a PointQuadtree<E>,
    idx: u32,
}

impl<'a, E> Clone for NodeRef<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for NodeRef<'a, E> {}

impl<'a, E> NodeRef<'a, E> {
    #[inline(always)]
    fn node(&self) -> &'a Node<E> {
        &self.tree.nodes[self.idx as usize]
    }

    pub fn anchor(&self) -> &'a E {
        &self.node().anchor
    }

    /// Anchor position as it was when the anchor was inserted.
    pub fn position(&self) -> (f64, f64) {
        let node = self.node();
        (node.x, node.y)
    }

    pub fn bounds(&self) -> Rectangle {
        self.node().bounds
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeRef<'a, E>> {
        let child = self.node().children[quadrant.slot()];
        if child == NO_CHILD {
            None
        } else {
            Some(NodeRef {
                tree: self.tree,
                idx: child,
            })
        }
    }

    pub fn has_child(&self, quadrant: Quadrant) -> bool {
        self.node().children[quadrant.slot()] != NO_CHILD
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
}
