pub mod geometry;
pub mod positioned;
pub mod shapes;

pub use positioned::Positioned;
