pub mod error;
pub mod image;
pub mod landmark;
pub mod math;

pub use error::{LandmarkError, Result};
pub use image::ImageSize;
pub use landmark::{NormalizedLandmark, Point2D};
pub use math::{distance, distance_squared, Planar};
