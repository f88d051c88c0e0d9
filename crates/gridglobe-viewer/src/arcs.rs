//! Route overlay: travel arcs and direction arrows.
//!
//! Built once at startup from the season calendar and left static; the legs
//! are children of the rotation root so they turn with the globe.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::picking::Pickable;
use bevy::prelude::*;

use gridglobe_core::{SEASON_2024, build_route};

use crate::globe::{GLOBE_RADIUS, GlobeRoot};

const ROUTE_COLOR: Color = Color::srgba(0.231, 0.510, 0.965, 0.4);
const ARROW_COLOR: Color = Color::srgba(0.376, 0.647, 0.980, 0.8);

const ARROW_RADIUS: f32 = 0.02;
const ARROW_HEIGHT: f32 = 0.06;

/// Marker component for route overlay entities.
#[derive(Component)]
struct RouteOverlay;

/// Plugin for the travel route overlay.
pub struct RouteOverlayPlugin;

impl Plugin for RouteOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, spawn_route);
    }
}

/// Build every leg of the season route and spawn its polyline and arrow.
#[allow(clippy::needless_pass_by_value)]
fn spawn_route(
    mut commands: Commands,
    root: Single<Entity, With<GlobeRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) -> Result {
    let route = build_route(SEASON_2024, GLOBE_RADIUS)?;

    let line_material = materials.add(StandardMaterial {
        base_color: ROUTE_COLOR,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let arrow_material = materials.add(StandardMaterial {
        base_color: ARROW_COLOR,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let arrow_mesh = meshes.add(Cone {
        radius: ARROW_RADIUS,
        height: ARROW_HEIGHT,
    });

    for leg in &route {
        let positions: Vec<[f32; 3]> = leg.geometry.points.iter().map(|p| p.to_array()).collect();
        let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);

        commands.spawn((
            RouteOverlay,
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(line_material.clone()),
            Transform::default(),
            Pickable::IGNORE,
            ChildOf(*root),
        ));

        // Cone points along +Y by default; rotate it onto the travel direction.
        let rotation = Quat::from_rotation_arc(Vec3::Y, leg.geometry.arrow_direction);
        commands.spawn((
            RouteOverlay,
            Mesh3d(arrow_mesh.clone()),
            MeshMaterial3d(arrow_material.clone()),
            Transform::from_translation(leg.geometry.arrow_position).with_rotation(rotation),
            Pickable::IGNORE,
            ChildOf(*root),
        ));
    }

    tracing::info!(legs = route.len(), "route overlay built");
    Ok(())
}
