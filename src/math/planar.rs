use super::Point2;

/// A value exposing planar `x` and `y` coordinates.
///
/// Anything else the value carries (depth, visibility, ...) is ignored by
/// the distance functions.
pub trait Planar {
    /// Returns the x coordinate.
    fn x(&self) -> f64;

    /// Returns the y coordinate.
    fn y(&self) -> f64;
}

impl<T: Planar + ?Sized> Planar for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl Planar for Point2 {
    fn x(&self) -> f64 {
        self.coords.x
    }

    fn y(&self) -> f64 {
        self.coords.y
    }
}

impl Planar for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}
