//! Orbit camera controller for the globe.
//!
//! Left-drag orbits around the globe origin, scroll zooms. Drag sensitivity
//! is scaled by the live camera distance so orbiting feels equally
//! responsive zoomed in or out.

use bevy::ecs::message::MessageReader;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::input::egui_wants_any_pointer_input;

use gridglobe_core::adaptive::drag_rotate_speed;

/// Camera distance at which all adaptive factors are 1.
pub const BASE_DISTANCE: f32 = 5.0;

/// Pitch limit, just short of the poles to keep the orbit stable.
const MAX_PITCH: f32 = 1.45;

/// Settings for camera movement.
#[derive(Resource)]
pub struct CameraSettings {
    /// Distance at which zoom and rotation factors are neutral.
    pub base_distance: f32,
    /// Closest allowed orbit distance.
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    pub max_distance: f32,
    /// Radians of orbit per pixel of drag, before distance scaling.
    pub drag_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            base_distance: BASE_DISTANCE,
            min_distance: 3.0,
            max_distance: 10.0,
            drag_sensitivity: 0.01,
        }
    }
}

/// Marker component for the orbiting camera entity.
#[derive(Component)]
pub struct OrbitCamera {
    /// Rotation around the polar axis, radians.
    pub yaw: f32,
    /// Elevation above the equatorial plane, radians.
    pub pitch: f32,
    /// Distance from the globe origin.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: BASE_DISTANCE,
        }
    }
}

/// Plugin for orbit camera controls.
pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>().add_systems(
            Update,
            (
                orbit_drag.run_if(not(egui_wants_any_pointer_input)),
                zoom_with_scroll.run_if(not(egui_wants_any_pointer_input)),
                apply_orbit_transform,
            )
                .chain(),
        );
    }
}

/// Orbit the camera with left-button drag.
#[allow(clippy::needless_pass_by_value)]
fn orbit_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    settings: Res<CameraSettings>,
    mut query: Query<&mut OrbitCamera>,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }

    if !mouse.pressed(MouseButton::Left) || delta == Vec2::ZERO {
        return;
    }

    for mut camera in &mut query {
        let speed = drag_rotate_speed(camera.distance, settings.base_distance)
            * settings.drag_sensitivity;
        camera.yaw -= delta.x * speed;
        camera.pitch = (camera.pitch + delta.y * speed).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

/// Zoom with the mouse scroll wheel.
#[allow(clippy::needless_pass_by_value)]
fn zoom_with_scroll(
    mut scroll_events: MessageReader<MouseWheel>,
    settings: Res<CameraSettings>,
    mut query: Query<&mut OrbitCamera>,
) {
    for event in scroll_events.read() {
        // Normalize scroll value: web reports pixels, native reports lines.
        let scroll = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 120.0,
        };
        if scroll != 0.0 {
            let factor = 0.9_f32.powf(scroll);
            for mut camera in &mut query {
                camera.distance = (camera.distance * factor)
                    .clamp(settings.min_distance, settings.max_distance);
            }
        }
    }
}

/// Recompute the camera transform from yaw/pitch/distance, looking at the
/// globe origin.
fn apply_orbit_transform(mut query: Query<(&OrbitCamera, &mut Transform)>) {
    for (camera, mut transform) in &mut query {
        let rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, -camera.pitch, 0.0);
        let position = rotation * (Vec3::Z * camera.distance);
        *transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
