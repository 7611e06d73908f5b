use super::Planar;

/// Returns the Euclidean distance between `a` and `b`.
///
/// Total over IEEE-754 inputs: a NaN coordinate yields NaN, otherwise an
/// infinite coordinate yields infinity. Distinct points never collapse to
/// zero, however close they are, and large finite separations do not
/// overflow to infinity (e.g. `(1e200, 0)` to `(0, 1e200)` is `~1.414e200`).
#[must_use]
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: Planar + ?Sized,
    B: Planar + ?Sized,
{
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();

    // `hypot` maps (NaN, inf) to inf; NaN must win.
    if dx.is_nan() || dy.is_nan() {
        return f64::NAN;
    }

    // Scaled, so tiny differences do not underflow when squared.
    dx.hypot(dy)
}

/// Returns the squared Euclidean distance between `a` and `b`.
///
/// Cheaper than [`distance`] when only an ordering is needed. Unlike
/// [`distance`], very small separations may underflow to zero.
#[must_use]
pub fn distance_squared<A, B>(a: &A, b: &B) -> f64
where
    A: Planar + ?Sized,
    B: Planar + ?Sized,
{
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}
