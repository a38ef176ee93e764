pub mod error;
pub mod quadtree;

pub use common::shapes;
pub use common::Positioned;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{NodeRef, PointQuadtree, Quadrant, QueryStats};
