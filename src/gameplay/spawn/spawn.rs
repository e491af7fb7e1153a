use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, BallRadius, DrawScale};
use crate::core::config::{BallMaterialConfig, BallSpec, GameConfig};
use crate::core::system::system_order::SceneSet;

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_balls.in_set(SceneSet::Bodies));
    }
}

/// Spawns every configured ball as a dynamic circular body at rest.
/// Runs once; the ball set is fixed for the lifetime of the app.
pub fn spawn_balls(mut commands: Commands, cfg: Res<GameConfig>) {
    for (i, spec) in cfg.scene.balls.iter().enumerate() {
        spawn_ball_entity(&mut commands, i, spec, &cfg.material);
    }
    info!("Spawned {} balls", cfg.scene.balls.len());
}

pub fn spawn_ball_entity(
    commands: &mut Commands,
    index: usize,
    spec: &BallSpec,
    material: &BallMaterialConfig,
) -> Entity {
    commands
        .spawn((
            Name::new(format!("Ball#{index}")),
            Ball,
            BallRadius(spec.radius),
            DrawScale(spec.scale),
            spec.sprite,
            Transform::from_xyz(spec.x, spec.y, 0.0),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::ball(spec.physical_radius()),
            ColliderMassProperties::Density(material.density),
            // Min against the edges' sqrt(0.2) gives sqrt(1.0 * 0.2); ball on ball stays 1.0.
            Friction {
                coefficient: material.friction,
                combine_rule: CoefficientCombineRule::Min,
            },
            // Bounce at the ball's own coefficient even against the inelastic edges.
            Restitution {
                coefficient: material.restitution,
                combine_rule: CoefficientCombineRule::Max,
            },
            Damping {
                linear_damping: 0.0,
                angular_damping: material.angular_damping,
            },
            Velocity::zero(),
            Sleeping::disabled(),
        ))
        .id()
}
