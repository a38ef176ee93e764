use super::{PointQuadtree, NO_CHILD};
use common::shapes::Rectangle;

impl<E> PointQuadtree<E> {
    /// Number of stored elements. Each node holds exactly one anchor, so this
    /// is the node count.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Pre-order walk: a node, then its children in quadrant order 1..4.
    fn for_each_node_preorder<F>(&self, mut f: F)
    where
        F: FnMut(u32, usize),
    {
        if self.nodes.is_empty() {
            return;
        }
        let mut stack: Vec<(u32, usize)> = vec![(0, 1)];
        while let Some((node_idx, depth)) = stack.pop() {
            f(node_idx, depth);
            let node = &self.nodes[node_idx as usize];
            // Reversed so quadrant 1 is popped first.
            for &child in node.children.iter().rev() {
                if child != NO_CHILD {
                    stack.push((child, depth + 1));
                }
            }
        }
    }

    /// Every stored element exactly once, in pre-order.
    pub fn all_elements(&self) -> Vec<&E> {
        let mut elements = Vec::with_capacity(self.nodes.len());
        self.for_each_node_preorder(|node_idx, _| {
            elements.push(&self.nodes[node_idx as usize].anchor);
        });
        elements
    }

    // Retrieve the bounds of every node, in pre-order
    pub fn node_bounds(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.for_each_node_preorder(|node_idx, _| {
            bounding_boxes.push(self.nodes[node_idx as usize].bounds);
        });
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        self.for_each_node_preorder(|_, depth| {
            max_depth = max_depth.max(depth);
        });
        max_depth
    }
}
