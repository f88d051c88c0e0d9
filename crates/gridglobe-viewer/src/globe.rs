//! Globe body, lighting, and idle rotation.
//!
//! The globe spawns as a rotation root with the textured sphere, markers,
//! and route overlay as children, so everything turns together. Marker and
//! arc geometry never depends on the texture having loaded; a missing
//! texture just leaves the sphere untextured.

use bevy::picking::events::{Click, Pointer};
use bevy::prelude::*;

use gridglobe_core::adaptive::rotation_speed_scale;

use crate::camera::{CameraSettings, OrbitCamera};
use crate::selection::GlobeInteraction;

/// Sphere radius shared by the projection consumers.
pub const GLOBE_RADIUS: f32 = 2.0;

/// Idle spin per frame at base distance, radians. Frame-coupled by design;
/// see DESIGN.md.
const IDLE_ROTATION_STEP: f32 = 0.001;

/// Root entity the whole globe hierarchy hangs off. Idle rotation and the
/// clear-selection click handler live here.
#[derive(Component)]
pub struct GlobeRoot;

/// The textured sphere itself.
#[derive(Component)]
struct GlobeBody;

/// Plugin for the globe body and idle rotation.
pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_globe)
            .add_systems(Update, idle_rotation);
    }
}

/// Spawn the rotation root, the textured sphere, and the lights.
fn setup_globe(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            ..default()
        },
        Transform::from_xyz(5.0, 3.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let sphere = meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(64, 64));
    // Equirectangular texture, same longitude convention as the projection.
    // Base color shows through until the asset resolves (or if it never does).
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.16, 0.21, 0.30),
        base_color_texture: Some(asset_server.load("textures/earth.jpg")),
        perceptual_roughness: 0.9,
        ..default()
    });

    commands
        .spawn((GlobeRoot, Transform::default(), Visibility::default()))
        .with_children(|root| {
            root.spawn((GlobeBody, Mesh3d(sphere), MeshMaterial3d(material)));
        })
        .observe(on_globe_click);
}

/// Clear the selection on a click that reaches the globe root.
///
/// Marker clicks bubble up this hierarchy too, but their own observer stops
/// propagation once the interaction core reports the click handled, so only
/// globe-body clicks arrive here.
fn on_globe_click(_event: On<Pointer<Click>>, mut interaction: ResMut<GlobeInteraction>) {
    interaction.click_globe();
}

/// Advance the idle spin, suppressed entirely while a race is selected or
/// any marker is hovered.
#[allow(clippy::needless_pass_by_value)]
fn idle_rotation(
    interaction: Res<GlobeInteraction>,
    settings: Res<CameraSettings>,
    camera: Single<&OrbitCamera>,
    mut query: Query<&mut Transform, With<GlobeRoot>>,
) {
    if interaction.idle_rotation_suppressed() {
        return;
    }

    let step = IDLE_ROTATION_STEP * rotation_speed_scale(camera.distance, settings.base_distance);
    for mut transform in &mut query {
        transform.rotate_y(step);
    }
}
