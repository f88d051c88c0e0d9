//! Interactive 3D globe of the 2024 race calendar using Bevy.
//!
//! Renders the season's venues as markers on a rotating globe, with raised
//! travel arcs between consecutive rounds and an emissions detail panel
//! driven by the shared selection state.

mod arcs;
mod camera;
mod globe;
mod markers;
mod selection;
mod ui;

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use camera::OrbitCamera;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            camera::OrbitCameraPlugin,
            globe::GlobePlugin,
            markers::MarkerPlugin,
            arcs::RouteOverlayPlugin,
            selection::SelectionPlugin,
            ui::PanelUiPlugin,
        ))
        .add_systems(Startup, setup_scene);
    }
}

/// Set up the initial 3D scene with camera.
fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: bevy::camera::ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, camera::BASE_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: std::f32::consts::FRAC_PI_4,
            ..Default::default()
        }),
        AmbientLight {
            color: Color::WHITE,
            brightness: 120.0,
            ..default()
        },
        OrbitCamera::default(),
    ));

    tracing::info!("Scene setup complete - drag to orbit, scroll to zoom, click a marker");
}

fn main() {
    // Initialize tracing for native platforms.
    #[cfg(not(target_family = "wasm"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    // Initialize tracing for WASM (logs to browser console).
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let mut app = App::new();

    #[allow(unused_mut)]
    let mut window = Window {
        title: "gridglobe".to_string(),
        resolution: (1440, 810).into(),
        ..Default::default()
    };

    // WASM: Fit canvas to parent element and prevent browser event handling.
    #[cfg(target_family = "wasm")]
    {
        window.fit_canvas_to_parent = true;
        window.prevent_default_event_handling = true;
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..Default::default()
    }));

    app.add_plugins((MeshPickingPlugin, AppPlugin)).run();
}
