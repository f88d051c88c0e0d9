//! Camera-distance-adaptive scale factors.
//!
//! All three factors are recomputed from the live camera distance every
//! frame (never eased) so apparent marker size, idle rotation speed, and
//! drag responsiveness stay roughly constant across zoom levels.

/// Marker scale multiplier: shrinks markers when the camera is close and
/// grows them when it is far.
#[must_use]
pub fn zoom_scale(camera_distance: f32, base_distance: f32) -> f32 {
    (camera_distance / base_distance).powf(1.8).clamp(0.15, 1.5)
}

/// Idle rotation speed multiplier, so the globe appears to spin at the same
/// on-screen rate regardless of zoom.
#[must_use]
pub fn rotation_speed_scale(camera_distance: f32, base_distance: f32) -> f32 {
    let ratio = camera_distance / base_distance;
    ratio * ratio
}

/// Unscaled pointer-drag rotation speed.
const BASE_DRAG_SPEED: f32 = 0.5;

/// Pointer-drag rotation speed, scaled and clamped so orbiting feels equally
/// responsive zoomed in or out.
#[must_use]
pub fn drag_rotate_speed(camera_distance: f32, base_distance: f32) -> f32 {
    (BASE_DRAG_SPEED * (camera_distance / base_distance).powf(1.5)).clamp(0.05, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_scale_is_clamped_at_both_extremes() {
        assert!((zoom_scale(0.0, 5.0) - 0.15).abs() < f32::EPSILON);
        assert!((zoom_scale(1e-6, 5.0) - 0.15).abs() < f32::EPSILON);
        assert!((zoom_scale(1e9, 5.0) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_scale_is_unity_at_base_distance() {
        assert!((zoom_scale(5.0, 5.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_scale_is_quadratic_in_distance() {
        assert!((rotation_speed_scale(5.0, 5.0) - 1.0).abs() < 1e-6);
        assert!((rotation_speed_scale(10.0, 5.0) - 4.0).abs() < 1e-6);
        assert!((rotation_speed_scale(2.5, 5.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn drag_speed_stays_within_bounds() {
        assert!((drag_rotate_speed(0.0, 5.0) - 0.05).abs() < f32::EPSILON);
        assert!((drag_rotate_speed(1e9, 5.0) - 0.5).abs() < f32::EPSILON);
        // At base distance the unclamped value 0.5 sits exactly on the cap.
        assert!((drag_rotate_speed(5.0, 5.0) - 0.5).abs() < 1e-6);
    }
}
