// Exits the app once `window.autoClose` seconds of *simulated* time have elapsed
// (frames stepped x physics.timestep), so a smoke run always advances the world
// by the same number of steps whatever the real frame rate. 0.0 => disabled.

use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCloseBudget {
    pub frames_left: u32,
}

impl AutoCloseBudget {
    pub fn from_config(cfg: &GameConfig) -> Option<Self> {
        let secs = cfg.window.auto_close;
        let dt = cfg.physics.timestep;
        if secs <= 0.0 || dt <= 0.0 {
            return None;
        }
        Some(Self {
            frames_left: (secs / dt).round().max(1.0) as u32,
        })
    }
}

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Last, count_down_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    if let Some(budget) = AutoCloseBudget::from_config(&cfg) {
        info!(
            seconds = cfg.window.auto_close,
            frames = budget.frames_left,
            "AutoClose: will exit after {} simulated seconds",
            cfg.window.auto_close
        );
        commands.insert_resource(budget);
    }
}

fn count_down_autoclose(
    budget: Option<ResMut<AutoCloseBudget>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut budget) = budget else {
        return;
    };
    budget.frames_left = budget.frames_left.saturating_sub(1);
    if budget.frames_left == 0 {
        info!("AutoClose: frame budget spent, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
