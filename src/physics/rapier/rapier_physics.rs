use std::num::NonZeroUsize;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

/// Installs Rapier and configures the default world from `GameConfig.physics`:
/// downward gravity, one fixed step of `timestep` per frame and the solver iteration counts.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, configure_world);

        let dt = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.physics.timestep)
            .unwrap_or(1.0 / 60.0);
        // Inserted after the Rapier plugin so it replaces the variable-step default.
        app.insert_resource(fixed_timestep(dt));
    }
}

/// Exactly one `dt` step per frame, regardless of wall-clock frame time.
pub fn fixed_timestep(dt: f32) -> TimestepMode {
    TimestepMode::Fixed {
        dt: dt.max(f32::EPSILON),
        substeps: 1,
    }
}

fn configure_world(
    mut q_world: Query<(&mut RapierConfiguration, &mut RapierContextSimulation)>,
    game_cfg: Res<GameConfig>,
) {
    let ph = &game_cfg.physics;
    let Ok((mut rapier_cfg, mut simulation)) = q_world.single_mut() else {
        warn!("no default Rapier context found; physics world left unconfigured");
        return;
    };
    rapier_cfg.gravity = Vect::new(0.0, ph.gravity_y);

    let params = &mut simulation.integration_parameters;
    params.dt = ph.timestep;
    params.num_solver_iterations =
        NonZeroUsize::new(ph.velocity_iterations).unwrap_or(NonZeroUsize::MIN);
    params.num_internal_stabilization_iterations = ph.position_iterations;
    info!(
        gravity_y = ph.gravity_y,
        dt = ph.timestep,
        velocity_iterations = ph.velocity_iterations,
        position_iterations = ph.position_iterations,
        "physics world configured"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_uses_configured_gravity_and_solver() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin))
            .insert_resource(GameConfig::default())
            .add_plugins(PhysicsSetupPlugin);
        app.update();

        assert!(matches!(
            app.world().resource::<TimestepMode>(),
            TimestepMode::Fixed { substeps: 1, .. }
        ));
        let world = app.world_mut();
        let mut q = world.query::<(&RapierConfiguration, &RapierContextSimulation)>();
        let (rapier_cfg, simulation) = q.single(world).expect("default rapier context");
        assert_eq!(rapier_cfg.gravity, Vect::new(0.0, -100.0));
        let params = &simulation.integration_parameters;
        assert_eq!(params.num_solver_iterations.get(), 8);
        assert_eq!(params.num_internal_stabilization_iterations, 3);
    }
}
