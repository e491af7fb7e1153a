//! Debug module: feature gated body-state logging and the Rapier wireframe toggle.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
mod keys;
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;

#[cfg(feature = "debug")]
pub use modes::DebugState;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use modes::{apply_wireframe_system, init_debug_state_from_config};

        app.init_resource::<DebugState>()
            .add_systems(Startup, init_debug_state_from_config)
            .add_systems(
                Update,
                (debug_key_input_system, apply_wireframe_system).chain(),
            )
            .add_systems(Last, debug_logging_system);
    }
}
