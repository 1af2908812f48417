use super::Vector2;

/// Returns the azimuth of a 2D vector in degrees, clockwise from the +Y
/// axis (north), normalized to `[0, 180)`.
///
/// Segments are undirected, so `v` and `-v` map to the same azimuth.
/// The vector must be non-zero.
#[must_use]
pub fn azimuth_of(v: &Vector2) -> f64 {
    let mut deg = v.x.atan2(v.y).to_degrees();
    if deg < 0.0 {
        deg += 180.0;
    }
    if deg >= 180.0 {
        deg -= 180.0;
    }
    deg
}

/// Returns the angular deviation between two undirected azimuths in
/// degrees, accounting for the 180° periodicity.
///
/// The result is in `[0, 90]`: the deviation is the minimum of the direct
/// difference and the complementary difference around the periodic
/// boundary.
#[must_use]
pub fn azimuth_deviation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 180.0;
    d.min(180.0 - d)
}

/// Returns the turning angle in radians, in `[0, π]`, between an incoming
/// and an outgoing direction.
#[must_use]
pub fn turning_angle(incoming: &Vector2, outgoing: &Vector2) -> f64 {
    incoming.angle(outgoing)
}
