use crate::math::Planar;

use super::Point2D;

/// A detected keypoint in normalized image coordinates.
///
/// `x` and `y` are fractions of the image width and height. `z` is a
/// relative depth and `visibility` the detector's confidence, when
/// reported. Only `x` and `y` take part in planar distance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedLandmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub visibility: Option<f64>,
}

impl NormalizedLandmark {
    /// Creates a landmark with no visibility score.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    /// Sets the visibility score.
    #[must_use]
    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Drops depth and visibility.
    #[must_use]
    pub const fn to_point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl Planar for NormalizedLandmark {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<NormalizedLandmark> for Point2D {
    fn from(landmark: NormalizedLandmark) -> Self {
        landmark.to_point()
    }
}
