mod normalized;
mod point;

pub use normalized::NormalizedLandmark;
pub use point::Point2D;
