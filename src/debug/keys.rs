#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<DebugState>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        state.wireframe = !state.wireframe;
        info!(
            "WIREFRAME {} frame={}",
            if state.wireframe { "ON" } else { "OFF" },
            state.frame_counter
        );
    }
}
