//! Geographic-to-sphere projection.
//!
//! Maps latitude/longitude onto a sphere centered at the origin with +Y as
//! the polar axis and longitude 0 on the equirectangular texture seam.
//! Markers, travel arcs, and the globe texture all share this convention;
//! any consumer using a different one ends up visually misaligned.

use glam::Vec3;

/// Project a latitude/longitude pair (degrees) onto a sphere of the given
/// radius.
///
/// Inputs must be finite; non-finite coordinates propagate NaN into the
/// result. Callers validate location data at load time.
#[must_use]
pub fn lat_lng_to_surface(lat_deg: f32, lng_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();

    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn prime_meridian_equator() {
        // (0, 0) lands on the +X axis with this orientation convention.
        let p = lat_lng_to_surface(0.0, 0.0, 2.0);
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn antimeridian_is_continuous() {
        let west = lat_lng_to_surface(0.0, -180.0, 2.0);
        let east = lat_lng_to_surface(0.0, 180.0, 2.0);
        assert!((west - east).length() < EPSILON);
    }

    #[test]
    fn north_pole_ignores_longitude() {
        let a = lat_lng_to_surface(90.0, 0.0, 2.0);
        let b = lat_lng_to_surface(90.0, 135.0, 2.0);
        let c = lat_lng_to_surface(90.0, -77.3, 2.0);
        assert!((a - b).length() < EPSILON);
        assert!((a - c).length() < EPSILON);
        assert!((a - Vec3::new(0.0, 2.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn hemispheres_map_to_opposite_poles() {
        assert!(lat_lng_to_surface(45.0, 10.0, 2.0).y > 0.0);
        assert!(lat_lng_to_surface(-45.0, 10.0, 2.0).y < 0.0);
    }

    proptest! {
        #[test]
        fn points_lie_on_the_sphere(
            lat in -90.0f32..=90.0,
            lng in -180.0f32..=180.0,
            radius in 0.1f32..=100.0,
        ) {
            let p = lat_lng_to_surface(lat, lng, radius);
            prop_assert!((p.length() - radius).abs() < radius * 1e-4);
        }
    }
}
