//! Tick-level collision detection on top of the point quadtree.
//!
//! The index is rebuilt from scratch on every call; nothing is kept between
//! ticks.

pub mod narrow_phase;

use common::geometry::point_in_circle;
use common::shapes::Rectangle;
use common::Positioned;
use fxhash::FxHashSet;
use quadtree::{PointQuadtree, QuadtreeError, QuadtreeResult, QueryStats};
use tracing::{debug, warn};

use narrow_phase::{balls_touch, ShapeWithPosition};

/// Indices into the entity slice handed to the detector.
pub type ColliderSet = FxHashSet<usize>;

/// When two entities count as touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdPolicy {
    /// Each entity searches a circle of twice its own extent; any other entity
    /// found there collides with it. Two entities collide iff their distance
    /// is at most `2 * max(r1, r2)`. This approximates the per-pair radius sum
    /// with the searching entity's own extent.
    #[default]
    DoubledExtent,
    /// Broad phase through the index, then an exact ball/ball test: collide
    /// iff the distance is at most `r1 + r2`.
    ExactContact,
}

#[derive(Debug, Default)]
pub struct CollisionReport {
    pub colliders: ColliderSet,
    /// Entities outside the universe; they were left out of the index.
    pub skipped: Vec<usize>,
    pub index_size: usize,
    pub stats: QueryStats,
}

// What the index stores: the entity plus its slot in the caller's slice.
struct Handle<'a, T> {
    index: usize,
    entity: &'a T,
}

impl<'a, T: Positioned> Positioned for Handle<'a, T> {
    fn x(&self) -> f64 {
        self.entity.x()
    }

    fn y(&self) -> f64 {
        self.entity.y()
    }

    fn extent(&self) -> f64 {
        self.entity.extent()
    }
}

#[derive(Debug, Clone)]
pub struct CollisionDetector {
    universe: Rectangle,
    policy: ThresholdPolicy,
}

impl CollisionDetector {
    pub fn new(universe: Rectangle) -> QuadtreeResult<Self> {
        if !universe.is_valid() {
            return Err(QuadtreeError::InvalidBounds {
                x1: universe.x1,
                y1: universe.y1,
                x2: universe.x2,
                y2: universe.y2,
            });
        }
        Ok(Self {
            universe,
            policy: ThresholdPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn universe(&self) -> Rectangle {
        self.universe
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Indices of every entity overlapping at least one other entity.
    ///
    /// Entities outside the universe cannot go into the index. They are still
    /// compared against everything else by brute force, so they collide
    /// exactly as they would inside it, and they are listed in
    /// `CollisionReport::skipped`.
    pub fn detect<T: Positioned>(&self, entities: &[T]) -> QuadtreeResult<ColliderSet> {
        Ok(self.detect_report(entities)?.colliders)
    }

    pub fn detect_report<T: Positioned>(
        &self,
        entities: &[T],
    ) -> QuadtreeResult<CollisionReport> {
        let mut report = CollisionReport::default();
        if entities.is_empty() {
            return Ok(report);
        }

        // entities[0] becomes the root anchor when it is inside the universe.
        let mut index = PointQuadtree::new(self.universe)?;
        let mut inserted = Vec::with_capacity(entities.len());
        let mut skipped = Vec::new();
        for (i, entity) in entities.iter().enumerate() {
            match index.insert(Handle { index: i, entity }) {
                Ok(()) => inserted.push(i),
                Err(QuadtreeError::PointOutOfBounds { x, y, .. }) => {
                    warn!(entity = i, x, y, "entity outside universe, checked by brute force");
                    skipped.push(i);
                }
                Err(err) => return Err(err),
            }
        }
        report.index_size = index.size();

        let pass = Pass {
            index: &index,
            entities,
            inserted: &inserted,
            skipped: &skipped,
        };
        match self.policy {
            ThresholdPolicy::DoubledExtent => pass.doubled_extent(&mut report),
            ThresholdPolicy::ExactContact => pass.exact_contact(&mut report),
        }
        report.skipped = skipped;

        debug!(
            entities = entities.len(),
            index_size = report.index_size,
            skipped = report.skipped.len(),
            colliders = report.colliders.len(),
            node_visits = report.stats.node_visits,
            pruned_nodes = report.stats.pruned_nodes,
            "collision pass complete"
        );
        Ok(report)
    }
}

// One detection pass over a freshly built index.
struct Pass<'a, 'e, T> {
    index: &'a PointQuadtree<Handle<'e, T>>,
    entities: &'e [T],
    inserted: &'a [usize],
    skipped: &'a [usize],
}

impl<'a, 'e, T: Positioned> Pass<'a, 'e, T> {
    // Whether `other` lies in the doubled-extent search circle of `searcher`.
    fn reaches(searcher: &T, other: &T) -> bool {
        point_in_circle(
            other.x(),
            other.y(),
            searcher.x(),
            searcher.y(),
            2.0 * searcher.extent(),
        )
    }

    fn doubled_extent(&self, report: &mut CollisionReport) {
        for &i in self.inserted {
            let entity = &self.entities[i];
            let mut hits: Vec<usize> = self
                .index
                .find_in_circle_with_stats(
                    entity.x(),
                    entity.y(),
                    2.0 * entity.extent(),
                    &mut report.stats,
                )
                .iter()
                .map(|hit| hit.index)
                .collect();
            hits.extend(
                self.skipped
                    .iter()
                    .copied()
                    .filter(|&s| Self::reaches(entity, &self.entities[s])),
            );
            // The entity always finds itself.
            if hits.len() > 1 {
                report.colliders.extend(hits);
            }
        }

        for &s in self.skipped {
            let entity = &self.entities[s];
            let hits: Vec<usize> = (0..self.entities.len())
                .filter(|&j| Self::reaches(entity, &self.entities[j]))
                .collect();
            if hits.len() > 1 {
                report.colliders.extend(hits);
            }
        }
    }

    fn exact_contact(&self, report: &mut CollisionReport) {
        let max_extent = self
            .inserted
            .iter()
            .map(|&i| self.entities[i].extent().max(0.0))
            .fold(0.0, f64::max);

        for &i in self.inserted {
            let entity = &self.entities[i];
            let shape = ShapeWithPosition::from_entity(entity);
            let reach = entity.extent().max(0.0) + max_extent;
            let hits = self.index.find_in_circle_with_stats(
                entity.x(),
                entity.y(),
                reach,
                &mut report.stats,
            );
            // Each pair is confirmed once, from its lower index.
            for hit in hits.into_iter().filter(|hit| hit.index > i) {
                if balls_touch(&shape, &ShapeWithPosition::from_entity(hit)) {
                    report.colliders.insert(i);
                    report.colliders.insert(hit.index);
                }
            }
        }

        // Skipped entities pair with every inserted one, and with the skipped
        // ones after them.
        for (k, &s) in self.skipped.iter().enumerate() {
            let shape = ShapeWithPosition::from_entity(&self.entities[s]);
            let others = self.inserted.iter().chain(&self.skipped[k + 1..]);
            for &j in others {
                if balls_touch(&shape, &ShapeWithPosition::from_entity(&self.entities[j])) {
                    report.colliders.insert(s);
                    report.colliders.insert(j);
                }
            }
        }
    }
}
