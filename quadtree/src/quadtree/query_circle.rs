use super::{PointQuadtree, QueryStats, NO_CHILD};
use common::geometry::{circle_intersects_rectangle, point_in_circle};

impl<E> PointQuadtree<E> {
    /// Every stored element whose position lies inside or on the circle, in
    /// pre-order.
    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&E> {
        let mut stats = QueryStats::default();
        self.find_in_circle_with_stats(cx, cy, cr, &mut stats)
    }

    pub fn find_in_circle_with<'a, F>(&'a self, cx: f64, cy: f64, cr: f64, mut f: F)
    where
        F: FnMut(&'a E),
    {
        let mut stats = QueryStats::default();
        self.query_circle(cx, cy, cr, &mut stats, &mut f);
    }

    pub fn find_in_circle_with_stats(
        &self,
        cx: f64,
        cy: f64,
        cr: f64,
        stats: &mut QueryStats,
    ) -> Vec<&E> {
        let mut hits = Vec::new();
        self.query_circle(cx, cy, cr, stats, &mut |element| hits.push(element));
        hits
    }

    fn query_circle<'a, F>(&'a self, cx: f64, cy: f64, cr: f64, stats: &mut QueryStats, f: &mut F)
    where
        F: FnMut(&'a E),
    {
        stats.queries += 1;
        if self.nodes.is_empty() {
            return;
        }

        let mut stack: Vec<u32> = vec![0];
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];
            let bounds = &node.bounds;
            if !circle_intersects_rectangle(
                cx, cy, cr, bounds.x1, bounds.y1, bounds.x2, bounds.y2,
            ) {
                stats.pruned_nodes += 1;
                continue;
            }
            stats.node_visits += 1;

            if point_in_circle(node.x, node.y, cx, cy, cr) {
                stats.anchor_hits += 1;
                f(&node.anchor);
            }

            // Descendants may hit even when the anchor misses.
            for &child in node.children.iter().rev() {
                if child != NO_CHILD {
                    stack.push(child);
                }
            }
        }
    }
}
