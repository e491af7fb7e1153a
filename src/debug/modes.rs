#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub wireframe: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            wireframe: false,
            log_interval: 2.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn init_debug_state_from_config(
    cfg: Res<crate::core::config::GameConfig>,
    mut state: ResMut<DebugState>,
) {
    state.wireframe = cfg.rapier_debug;
    state.log_interval = cfg.log_interval;
}

/// Mirrors `DebugState.wireframe` into Rapier's debug renderer (absent in headless apps).
#[cfg(feature = "debug")]
pub fn apply_wireframe_system(
    state: Res<DebugState>,
    ctx: Option<ResMut<bevy_rapier2d::render::DebugRenderContext>>,
) {
    if let Some(mut ctx) = ctx {
        if ctx.enabled != state.wireframe {
            ctx.enabled = state.wireframe;
        }
    }
}
