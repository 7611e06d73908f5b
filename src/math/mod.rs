pub mod distance_2d;
mod planar;

pub use distance_2d::{distance, distance_squared};
pub use planar::Planar;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
