pub mod annotation;
pub mod edge;
pub mod geometry;

pub use annotation::*;
pub use edge::*;
pub use geometry::*;
