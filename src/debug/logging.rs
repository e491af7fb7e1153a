#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use crate::core::components::Ball;
#[cfg(feature = "debug")]
use crate::rendering::draw::body_angle;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    q_balls: Query<(&Name, &Transform), With<Ball>>,
) {
    state.frame_counter += 1;
    if state.log_interval <= 0.0 {
        return;
    }
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    info!("SIM frame={} t={:.3}s balls={}", state.frame_counter, time.elapsed_secs(), q_balls.iter().count());
    for (name, tf) in &q_balls {
        info!(
            "  {name} pos=({:.1}, {:.1}) angle={:.3}",
            tf.translation.x,
            tf.translation.y,
            body_angle(tf)
        );
    }
}
