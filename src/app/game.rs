use bevy::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;

use crate::core::config::{ConfigLoadReport, GameConfig};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::spawn::spawn::BallSpawnPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::arena::arena::ArenaPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::background::background::BackgroundPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::draw::BallDrawPlugin;
use crate::rendering::sprites::SpritesPlugin;

/// Headless half of the game: physics world, arena edges and ball bodies.
/// Expects a `GameConfig` resource to be present before it is added.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((PhysicsSetupPlugin, ArenaPlugin, BallSpawnPlugin));
    }
}

/// Full game: simulation plus sprites, draw pass and session/debug helpers.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let wireframe = app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|cfg| cfg.rapier_debug);
        app.add_plugins((
            SimulationPlugin,
            RapierDebugRenderPlugin {
                enabled: wireframe,
                ..default()
            },
            CameraPlugin,
            SpritesPlugin,
            BackgroundPlugin,
            BallDrawPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ))
        .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(cfg: Res<GameConfig>, report: Option<Res<ConfigLoadReport>>) {
    if let Some(report) = report {
        if report.used.is_empty() {
            info!("No config layers found; using built-in defaults");
        } else {
            info!("Config layers: {}", report.used.join(", "));
        }
        for e in &report.errors {
            warn!("CONFIG issue: {e}");
        }
    }
    for w in cfg.validate() {
        warn!("CONFIG warning: {w}");
    }
}
