//! Mathematical utilities for the sunrise/sunset calculation.
//!
//! All trigonometric helpers here work in degrees: the direct functions take an angle in
//! degrees, the inverse functions return one.

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Brings `value` into `[0, limit]` by repeatedly adding or subtracting `limit`.
///
/// Both bounds are inclusive, so `constrain(360.0, 360.0)` stays at 360. Non-finite input is
/// returned unchanged.
#[allow(clippy::while_float)]
pub fn constrain(limit: f64, value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let mut value = value;
    // Far-off inputs are reduced first; `%` is exact, so the stepping below runs at most once.
    if value.abs() > limit * 4.0 {
        value %= limit;
    }
    while value < 0.0 {
        value += limit;
    }
    while value > limit {
        value -= limit;
    }
    value
}

/// Rounds half-way cases towards positive infinity (`floor(x + 0.5)`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    floor(x + 0.5)
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arctangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
