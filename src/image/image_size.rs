use std::str::FromStr;

use crate::error::{GeometryError, InputError, LandmarkError, Result};
use crate::landmark::Point2D;
use crate::math::{distance, Planar, Vector2};

/// Pixel dimensions of the image landmarks were detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    /// Creates a new image size.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyImage` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyImage { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn scale(&self) -> Vector2 {
        Vector2::new(f64::from(self.width), f64::from(self.height))
    }

    /// Maps a normalized coordinate to pixels.
    ///
    /// Coordinates outside `[0, 1]` map outside the image; nothing is clamped.
    #[must_use]
    pub fn to_pixels(&self, p: &impl Planar) -> Point2D {
        let v = Vector2::new(p.x(), p.y()).component_mul(&self.scale());
        Point2D::new(v.x, v.y)
    }

    /// Maps a pixel coordinate back to normalized space.
    #[must_use]
    pub fn to_normalized(&self, p: &impl Planar) -> Point2D {
        let v = Vector2::new(p.x(), p.y()).component_div(&self.scale());
        Point2D::new(v.x, v.y)
    }

    /// Returns the distance between two normalized points, measured in pixels.
    ///
    /// Differs from `distance(a, b) * width` on non-square images, since
    /// each axis is normalized by its own dimension.
    #[must_use]
    pub fn pixel_distance(&self, a: &impl Planar, b: &impl Planar) -> f64 {
        distance(&self.to_pixels(a), &self.to_pixels(b))
    }
}

impl FromStr for ImageSize {
    type Err = LandmarkError;

    /// Parses `WIDTHxHEIGHT`, e.g. `1280x720`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || InputError::InvalidImageSize(s.to_owned());
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(width, height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::landmark::NormalizedLandmark;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn zero_dimension_is_rejected() {
        let err = ImageSize::new(0, 720).unwrap_err();
        assert!(matches!(
            err,
            LandmarkError::Geometry(GeometryError::EmptyImage { width: 0, height: 720 })
        ));
        assert!(ImageSize::new(640, 0).is_err());
    }

    #[test]
    fn to_pixels_scales_each_axis() {
        let size = ImageSize::new(1280, 720).unwrap();
        let p = size.to_pixels(&Point2D::new(0.5, 0.25));
        assert_relative_eq!(p.x, 640.0, epsilon = TOL);
        assert_relative_eq!(p.y, 180.0, epsilon = TOL);
    }

    #[test]
    fn to_pixels_does_not_clamp() {
        let size = ImageSize::new(100, 100).unwrap();
        let p = size.to_pixels(&Point2D::new(-0.5, 1.5));
        assert_relative_eq!(p.x, -50.0, epsilon = TOL);
        assert_relative_eq!(p.y, 150.0, epsilon = TOL);
    }

    #[test]
    fn to_normalized_inverts_to_pixels() {
        let size = ImageSize::new(1920, 1080).unwrap();
        let p = Point2D::new(0.3, 0.7);
        let back = size.to_normalized(&size.to_pixels(&p));
        assert_relative_eq!(back.x, p.x, epsilon = TOL);
        assert_relative_eq!(back.y, p.y, epsilon = TOL);
    }

    #[test]
    fn pixel_distance_on_square_image() {
        // 0.3 of 1000 = 300 px, 0.4 of 1000 = 400 px.
        let size = ImageSize::new(1000, 1000).unwrap();
        let a = NormalizedLandmark::new(0.0, 0.0, 0.0);
        let b = NormalizedLandmark::new(0.3, 0.4, 0.9);
        assert_relative_eq!(size.pixel_distance(&a, &b), 500.0, epsilon = TOL);
    }

    #[test]
    fn pixel_distance_on_non_square_image() {
        // Stretching one axis changes the pixel distance but not the normalized one.
        let a = NormalizedLandmark::new(0.0, 0.0, 0.0);
        let b = NormalizedLandmark::new(0.3, 0.4, 0.9);
        let wide = ImageSize::new(2000, 1000).unwrap();
        assert_relative_eq!(wide.pixel_distance(&a, &b), 600.0_f64.hypot(400.0), epsilon = TOL);
    }

    #[test]
    fn parse_width_by_height() {
        let size: ImageSize = "1280x720".parse().unwrap();
        assert_eq!((size.width(), size.height()), (1280, 720));
        let size: ImageSize = " 640 X 480 ".trim().parse().unwrap();
        assert_eq!((size.width(), size.height()), (640, 480));
    }

    #[test]
    fn parse_rejects_malformed_sizes() {
        assert!(matches!(
            "1280".parse::<ImageSize>(),
            Err(LandmarkError::Input(InputError::InvalidImageSize(_)))
        ));
        assert!("ax720".parse::<ImageSize>().is_err());
        assert!(matches!(
            "0x720".parse::<ImageSize>(),
            Err(LandmarkError::Geometry(GeometryError::EmptyImage { .. }))
        ));
    }
}
