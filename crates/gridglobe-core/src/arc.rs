//! Travel arc construction.
//!
//! Arcs are stylized raised curves between two surface points, not
//! navigation-grade great circles: the chord between the endpoints is
//! projected back onto the sphere and lifted by a sine-shaped bulge that is
//! zero at both endpoints. Construction is deterministic and side-effect
//! free, so the route overlay builds it once and keeps the result.

use glam::Vec3;

use crate::error::{GeometryError, GeometryResult};
use crate::projection::lat_lng_to_surface;
use crate::season::Race;

/// Subdivision count used by the route overlay.
pub const DEFAULT_ARC_SEGMENTS: usize = 50;

/// Bulge height gained per radian of angular separation.
const HEIGHT_PER_RADIAN: f32 = 0.3;

/// Bulge cap, so near-antipodal pairs stay reasonable.
const MAX_HEIGHT: f32 = 0.4;

/// Fraction along the arc where the direction arrow sits. Biased past the
/// midpoint for legibility.
const ARROW_PLACEMENT: f32 = 0.6;

/// A single constructed arc: the polyline plus the arrow pose.
#[derive(Debug, Clone)]
pub struct ArcGeometry {
    /// `segments + 1` points from start to end, all at or above the sphere
    /// surface.
    pub points: Vec<Vec3>,
    /// Position of the directional arrow on the arc.
    pub arrow_position: Vec3,
    /// Normalized travel direction at the arrow position.
    pub arrow_direction: Vec3,
}

/// One leg of the season route, keyed by the ordered pair of race ids.
#[derive(Debug, Clone)]
pub struct RouteLeg {
    pub from: &'static str,
    pub to: &'static str,
    pub geometry: ArcGeometry,
}

/// Build a raised arc between two points on a sphere of the given radius.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewSegments`] when `segments < 3`; the arrow
/// direction needs a neighbor on each side of its sample point, and silently
/// clamping would mask a misconfigured caller.
pub fn build_arc(
    start: Vec3,
    end: Vec3,
    radius: f32,
    segments: usize,
) -> GeometryResult<ArcGeometry> {
    if segments < 3 {
        return Err(GeometryError::TooFewSegments { segments });
    }

    let angle = start.normalize().angle_between(end.normalize());
    let height = (angle * HEIGHT_PER_RADIAN).min(MAX_HEIGHT);

    #[allow(clippy::cast_precision_loss)]
    let points: Vec<Vec3> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let bulge = 1.0 + height * (t * std::f32::consts::PI).sin();
            start.lerp(end, t).normalize() * (radius * bulge)
        })
        .collect();

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let arrow_index = (ARROW_PLACEMENT * segments as f32).floor() as usize;
    let arrow_position = points[arrow_index];
    let arrow_direction = (points[arrow_index + 1] - points[arrow_index - 1]).normalize();

    Ok(ArcGeometry {
        points,
        arrow_position,
        arrow_direction,
    })
}

/// Build the full route overlay: one leg per consecutive pair of races, in
/// calendar order. The route does not wrap back to the opening race.
///
/// Fewer than two races legitimately produces an empty route.
///
/// # Errors
///
/// Propagates [`GeometryError`] from [`build_arc`].
pub fn build_route(races: &[Race], radius: f32) -> GeometryResult<Vec<RouteLeg>> {
    races
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let start = lat_lng_to_surface(from.lat, from.lng, radius);
            let end = lat_lng_to_surface(to.lat, to.lng, radius);
            Ok(RouteLeg {
                from: from.id,
                to: to.id,
                geometry: build_arc(start, end, radius, DEFAULT_ARC_SEGMENTS)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::SEASON_2024;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-4;

    fn surface(lat: f32, lng: f32) -> Vec3 {
        lat_lng_to_surface(lat, lng, 2.0)
    }

    #[test]
    fn endpoints_are_exact() {
        // Bahrain to Monaco, the season's example pair.
        let a = surface(26.0, 50.5);
        let b = surface(43.7, 7.4);
        let arc = build_arc(a, b, 2.0, 50).unwrap();

        assert_eq!(arc.points.len(), 51);
        assert!((arc.points[0] - a).length() < EPSILON);
        assert!((arc.points[50] - b).length() < EPSILON);
    }

    #[test]
    fn arrow_sits_past_the_midpoint() {
        let arc = build_arc(surface(26.0, 50.5), surface(43.7, 7.4), 2.0, 50).unwrap();
        // floor(0.6 * 50) = 30.
        assert!((arc.arrow_position - arc.points[30]).length() < EPSILON);
        let expected = (arc.points[31] - arc.points[29]).normalize();
        assert!((arc.arrow_direction - expected).length() < EPSILON);
    }

    #[test]
    fn too_few_segments_is_rejected() {
        let a = surface(0.0, 0.0);
        let b = surface(10.0, 10.0);
        assert_eq!(
            build_arc(a, b, 2.0, 2).unwrap_err(),
            GeometryError::TooFewSegments { segments: 2 }
        );
        assert!(build_arc(a, b, 2.0, 3).is_ok());
    }

    #[test]
    fn reversed_arc_has_same_point_count() {
        let a = surface(-37.8, 144.9);
        let b = surface(34.8, 136.5);
        let forward = build_arc(a, b, 2.0, 50).unwrap();
        let backward = build_arc(b, a, 2.0, 50).unwrap();
        assert_eq!(forward.points.len(), backward.points.len());
    }

    #[test]
    fn season_route_has_one_leg_per_transition() {
        let route = build_route(SEASON_2024, 2.0).unwrap();
        assert_eq!(route.len(), SEASON_2024.len() - 1);
        assert_eq!(route[0].from, "bahrain");
        assert_eq!(route[0].to, "saudi-arabia");
        assert_eq!(route.last().unwrap().to, "abu-dhabi");
    }

    #[test]
    fn two_stop_route_produces_a_single_leg() {
        let template = SEASON_2024[0];
        let stops = [
            Race {
                id: "a",
                lat: 26.0,
                lng: 50.5,
                ..template
            },
            Race {
                id: "b",
                lat: 43.7,
                lng: 7.4,
                ..template
            },
        ];

        let route = build_route(&stops, 2.0).unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!((route[0].from, route[0].to), ("a", "b"));
        assert_eq!(route[0].geometry.points.len(), 51);
    }

    #[test]
    fn short_sequences_produce_empty_routes() {
        assert!(build_route(&[], 2.0).unwrap().is_empty());
        assert!(build_route(&SEASON_2024[..1], 2.0).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn arc_stays_between_surface_and_bulge_cap(
            lat_a in -80.0f32..=80.0,
            lng_a in -180.0f32..=180.0,
            lat_b in -80.0f32..=80.0,
            lng_b in -180.0f32..=180.0,
        ) {
            let a = surface(lat_a, lng_a);
            let b = surface(lat_b, lng_b);
            // Skip degenerate pairs: a zero-length chord has no direction.
            prop_assume!((a - b).length() > 1e-3);

            let arc = build_arc(a, b, 2.0, 50).unwrap();
            for p in &arc.points {
                prop_assert!(p.length() >= 2.0 - 1e-3);
                prop_assert!(p.length() <= 2.0 * (1.0 + MAX_HEIGHT) + 1e-3);
            }
        }
    }
}
