use super::{Node, PointQuadtree, Quadrant, NO_CHILD};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::Positioned;
use tracing::trace;

impl<E: Positioned> PointQuadtree<E> {
    /// Inserts `element`, descending from the root to the empty child slot of
    /// the quadrant it routes to.
    ///
    /// Elements outside the tree bounds (or with non-finite coordinates) are
    /// rejected: every node's anchor has to lie inside its own bounds for
    /// range queries to prune correctly.
    pub fn insert(&mut self, element: E) -> QuadtreeResult<()> {
        let x = element.x();
        let y = element.y();
        if !self.bounds.contains_point(x, y) {
            return Err(QuadtreeError::PointOutOfBounds {
                x,
                y,
                bounds_x1: self.bounds.x1,
                bounds_y1: self.bounds.y1,
                bounds_x2: self.bounds.x2,
                bounds_y2: self.bounds.y2,
            });
        }

        if self.nodes.is_empty() {
            self.nodes.push(Node::new(element, x, y, self.bounds));
            return Ok(());
        }

        let new_idx = u32::try_from(self.nodes.len()).map_err(|_| {
            QuadtreeError::CapacityExceeded {
                nodes: self.nodes.len(),
            }
        })?;

        let mut node_idx = 0usize;
        loop {
            let node = &self.nodes[node_idx];
            let quadrant = Quadrant::classify(node.x, node.y, x, y);
            let child = node.children[quadrant.slot()];
            if child != NO_CHILD {
                node_idx = child as usize;
                continue;
            }

            let bounds = quadrant.child_bounds(&node.bounds, node.x, node.y);
            self.nodes[node_idx].children[quadrant.slot()] = new_idx;
            self.nodes.push(Node::new(element, x, y, bounds));
            trace!(
                node = new_idx,
                parent = node_idx,
                quadrant = quadrant.number(),
                "created quadtree leaf"
            );
            return Ok(());
        }
    }

    /// Inserts every element in order, stopping at the first failure.
    pub fn insert_all<I>(&mut self, elements: I) -> QuadtreeResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.insert(element)?;
        }
        Ok(())
    }
}
