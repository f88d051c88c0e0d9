//! Race markers: picking observers and per-frame visual easing.
//!
//! Each race gets a marker sphere plus a translucent glow shell, both
//! children of the rotation root at the projected surface position. Markers
//! never store their own "selected" flag; every frame they derive their tier
//! from the shared interaction state and chase it with the core's easing.

use bevy::picking::Pickable;
use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::prelude::*;

use gridglobe_core::adaptive::zoom_scale;
use gridglobe_core::marker::{MarkerTier, MarkerVisual};
use gridglobe_core::{ClickOutcome, Race, SEASON_2024, lat_lng_to_surface};

use crate::camera::{CameraSettings, OrbitCamera};
use crate::globe::{GLOBE_RADIUS, GlobeRoot};
use crate::selection::GlobeInteraction;

/// Marker component for one race venue.
#[derive(Component)]
pub struct RaceMarker {
    pub race: &'static Race,
    /// Whether the pointer is currently over this marker.
    hovered: bool,
    /// Eased display values, advanced once per frame.
    visual: MarkerVisual,
    /// The sibling glow shell entity.
    glow: Entity,
}

/// Marker component for a glow shell.
#[derive(Component)]
struct MarkerGlow;

/// Shared mesh and per-tier material handles for all markers.
///
/// Swapping handles keeps tier colors discrete without mutating materials
/// that other markers share.
#[derive(Resource)]
struct MarkerAssets {
    body: [Handle<StandardMaterial>; 3],
    glow: [Handle<StandardMaterial>; 3],
}

fn tier_index(tier: MarkerTier) -> usize {
    match tier {
        MarkerTier::Neutral => 0,
        MarkerTier::Hovered => 1,
        MarkerTier::Selected => 2,
    }
}

const TIERS: [MarkerTier; 3] = [
    MarkerTier::Neutral,
    MarkerTier::Hovered,
    MarkerTier::Selected,
];

/// Plugin for race markers.
pub struct MarkerPlugin;

impl Plugin for MarkerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, spawn_markers)
            .add_systems(Update, update_marker_visuals);
    }
}

/// Spawn one marker + glow pair per race, as children of the rotation root.
#[allow(clippy::needless_pass_by_value)]
fn spawn_markers(
    mut commands: Commands,
    root: Single<Entity, With<GlobeRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(16, 16));

    let body = TIERS.map(|tier| {
        let [r, g, b] = tier.color();
        materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, 0.9),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })
    });
    let glow = TIERS.map(|tier| {
        let [r, g, b] = tier.color();
        materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, tier.glow_opacity()),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })
    });

    let neutral = MarkerVisual::default();
    for race in SEASON_2024 {
        let position = lat_lng_to_surface(race.lat, race.lng, GLOBE_RADIUS);

        let glow_entity = commands
            .spawn((
                MarkerGlow,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(glow[0].clone()),
                Transform::from_translation(position)
                    .with_scale(Vec3::splat(neutral.current_glow_size)),
                // Glow shells are decoration; they must not swallow picks
                // aimed at the marker inside them.
                Pickable::IGNORE,
                ChildOf(*root),
            ))
            .id();

        commands
            .spawn((
                RaceMarker {
                    race,
                    hovered: false,
                    visual: MarkerVisual::default(),
                    glow: glow_entity,
                },
                Mesh3d(mesh.clone()),
                MeshMaterial3d(body[0].clone()),
                Transform::from_translation(position).with_scale(Vec3::splat(neutral.current_size)),
                ChildOf(*root),
            ))
            .observe(on_marker_over)
            .observe(on_marker_out)
            .observe(on_marker_click);
    }

    commands.insert_resource(MarkerAssets { body, glow });
    tracing::info!(markers = SEASON_2024.len(), "markers spawned");
}

fn on_marker_over(
    event: On<Pointer<Over>>,
    mut markers: Query<&mut RaceMarker>,
    mut interaction: ResMut<GlobeInteraction>,
) {
    if let Ok(mut marker) = markers.get_mut(event.event().event_target()) {
        marker.hovered = true;
        interaction.pointer_enter();
    }
}

fn on_marker_out(
    event: On<Pointer<Out>>,
    mut markers: Query<&mut RaceMarker>,
    mut interaction: ResMut<GlobeInteraction>,
) {
    if let Ok(mut marker) = markers.get_mut(event.event().event_target()) {
        marker.hovered = false;
        interaction.pointer_leave();
    }
}

/// Dispatch a marker click to the interaction core and stop propagation when
/// it reports the click handled, so the globe root's clear-selection handler
/// never sees it.
fn on_marker_click(
    mut event: On<Pointer<Click>>,
    markers: Query<&RaceMarker>,
    mut interaction: ResMut<GlobeInteraction>,
) {
    let Ok(marker) = markers.get(event.event().event_target()) else {
        return;
    };
    if interaction.click_marker(marker.race.id) == ClickOutcome::Handled {
        event.propagate(false);
    }
}

/// Ease every marker toward its tier targets and apply the camera-adaptive
/// zoom factor.
///
/// Targets are re-derived from the interaction state first, so easing lags a
/// state change by exactly one frame. The zoom factor is live, never eased.
#[allow(clippy::needless_pass_by_value, clippy::type_complexity)]
fn update_marker_visuals(
    interaction: Res<GlobeInteraction>,
    settings: Res<CameraSettings>,
    camera: Single<&OrbitCamera>,
    assets: Res<MarkerAssets>,
    mut markers: Query<(
        &mut RaceMarker,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
    mut glows: Query<
        (&mut Transform, &mut MeshMaterial3d<StandardMaterial>),
        (With<MarkerGlow>, Without<RaceMarker>),
    >,
) {
    let zoom = zoom_scale(camera.distance, settings.base_distance);

    for (mut marker, mut transform, mut material) in &mut markers {
        let tier = MarkerTier::from_state(interaction.is_selected(marker.race.id), marker.hovered);
        marker.visual.step(tier);

        transform.scale = Vec3::splat(marker.visual.current_size * zoom);
        let wanted = &assets.body[tier_index(tier)];
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }

        if let Ok((mut glow_transform, mut glow_material)) = glows.get_mut(marker.glow) {
            glow_transform.scale = Vec3::splat(marker.visual.current_glow_size * zoom);
            let wanted = &assets.glow[tier_index(tier)];
            if glow_material.0 != *wanted {
                glow_material.0 = wanted.clone();
            }
        }
    }
}
