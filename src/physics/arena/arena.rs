use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::ArenaEdge;
use crate::core::config::{GameConfig, SceneConfig};
use crate::core::system::system_order::SceneSet;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena.in_set(SceneSet::Bodies));
    }
}

impl ArenaEdge {
    pub const ALL: [ArenaEdge; 4] = [
        ArenaEdge::Ground,
        ArenaEdge::LeftWall,
        ArenaEdge::RightWall,
        ArenaEdge::TopWall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArenaEdge::Ground => "Ground",
            ArenaEdge::LeftWall => "WallLeft",
            ArenaEdge::RightWall => "WallRight",
            ArenaEdge::TopWall => "WallTop",
        }
    }

    /// Segment endpoints in world space. The ground doubles as the bottom boundary.
    pub fn endpoints(self, scene: &SceneConfig) -> (Vec2, Vec2) {
        let (hw, hh) = (scene.half_width, scene.half_height);
        match self {
            ArenaEdge::Ground => (Vec2::new(-hw, -hh), Vec2::new(hw, -hh)),
            ArenaEdge::LeftWall => (Vec2::new(-hw, -hh), Vec2::new(-hw, hh)),
            ArenaEdge::RightWall => (Vec2::new(hw, -hh), Vec2::new(hw, hh)),
            ArenaEdge::TopWall => (Vec2::new(-hw, hh), Vec2::new(hw, hh)),
        }
    }
}

/// Spawns the ground and three walls as fixed bodies with edge-segment colliders.
pub fn spawn_arena(mut commands: Commands, cfg: Res<GameConfig>) {
    let scene = &cfg.scene;
    for edge in ArenaEdge::ALL {
        let (a, b) = edge.endpoints(scene);
        commands.spawn((
            Name::new(edge.label()),
            edge,
            RigidBody::Fixed,
            Collider::segment(a, b),
            Friction::coefficient(scene.edge_friction),
            Transform::default(),
        ));
    }
    info!(
        half_width = scene.half_width,
        half_height = scene.half_height,
        "arena edges spawned"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_frame_the_arena() {
        let scene = SceneConfig::default();
        let (a, b) = ArenaEdge::Ground.endpoints(&scene);
        assert_eq!((a, b), (Vec2::new(-540.0, -320.0), Vec2::new(540.0, -320.0)));
        let (a, b) = ArenaEdge::TopWall.endpoints(&scene);
        assert_eq!((a, b), (Vec2::new(-540.0, 320.0), Vec2::new(540.0, 320.0)));
        for edge in [ArenaEdge::LeftWall, ArenaEdge::RightWall] {
            let (a, b) = edge.endpoints(&scene);
            assert_eq!(a.x, b.x);
            assert_eq!(a.x.abs(), 540.0);
            assert_eq!((a.y, b.y), (-320.0, 320.0));
        }
    }

    #[test]
    fn ball_on_edge_friction_is_geometric_mean() {
        // Rapier applies the higher-priority rule of the pair; Min outranks Average.
        let ball = CoefficientCombineRule::Min;
        let edge = CoefficientCombineRule::Average;
        assert!(ball as usize > edge as usize);
        let combined = 1.0f32.min(SceneConfig::default().edge_friction);
        assert!((combined - (1.0f32 * 0.2).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn spawns_four_fixed_edges() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .add_plugins(ArenaPlugin);
        app.update();

        let world = app.world_mut();
        let mut q = world.query::<(&ArenaEdge, &RigidBody, &Collider, &Friction)>();
        let edges: Vec<_> = q.iter(world).collect();
        assert_eq!(edges.len(), 4);
        for (_, body, collider, friction) in edges {
            assert!(matches!(body, RigidBody::Fixed));
            assert!(collider.as_segment().is_some(), "edges must be segments");
            assert!((friction.coefficient - 0.2f32.sqrt()).abs() < 1e-6);
            assert_eq!(friction.combine_rule, CoefficientCombineRule::Average);
        }
    }
}
