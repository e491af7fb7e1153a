//! Ball draw pass.
//!
//! Each frame every ball sprite is placed from its body's live position and angle.
//! The placement is composed in screen space (origin top-left, y down, fixed
//! origin offset) and then mapped into Bevy's world space (origin centre, y up)
//! for a sprite anchored at its top-left corner.

use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::transform::TransformSystem;
use bevy_rapier2d::plugin::PhysicsSet;

use crate::core::components::{Ball, BallRadius, BallVisual, DrawScale, SpriteId};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{DrawSet, SceneSet};
use crate::rendering::sprites::SpriteHandles;

const BALL_Z: f32 = 1.0;

fn flip_y() -> Affine2 {
    Affine2::from_mat2(Mat2::from_cols(Vec2::X, Vec2::NEG_Y))
}

/// Sprite-local (pixels, y down) to screen space:
/// translate by (-r, -r), rotate by -angle, scale, translate to (x + ox, oy - y).
pub fn screen_transform(origin: Vec2, position: Vec2, angle: f32, radius: f32, scale: f32) -> Affine2 {
    Affine2::from_translation(Vec2::new(position.x + origin.x, origin.y - position.y))
        * Affine2::from_scale(Vec2::splat(scale))
        * Affine2::from_angle(-angle)
        * Affine2::from_translation(Vec2::splat(-radius))
}

/// Maps a screen-space sprite transform to a world `Transform` for a top-left anchored sprite.
/// Sprite-local y points up in Bevy, so the image's pixel rows are flipped on the way in
/// and screen y is flipped (and re-centred on `origin`) on the way out.
pub fn screen_to_world(origin: Vec2, screen: Affine2, z: f32) -> Transform {
    let world = Affine2::from_translation(Vec2::new(-origin.x, origin.y)) * flip_y() * screen * flip_y();
    let (scale, angle, translation) = world.to_scale_angle_translation();
    Transform {
        translation: translation.extend(z),
        rotation: Quat::from_rotation_z(angle),
        scale: scale.extend(1.0),
    }
}

/// Counter-clockwise angle of a body about the z axis.
pub fn body_angle(transform: &Transform) -> f32 {
    let (_, _, z) = transform.rotation.to_euler(EulerRot::XYZ);
    z
}

pub struct BallDrawPlugin;

impl Plugin for BallDrawPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Startup, (SceneSet::Bodies, SceneSet::Visuals).chain())
            .configure_sets(
                PostUpdate,
                DrawSet
                    .after(PhysicsSet::Writeback)
                    .before(TransformSystem::TransformPropagate),
            )
            .add_systems(Startup, spawn_ball_visuals.in_set(SceneSet::Visuals))
            .add_systems(PostUpdate, draw_balls.in_set(DrawSet));
    }
}

/// Pairs each ball body with a sprite entity. The body stays owned by the physics world.
pub fn spawn_ball_visuals(
    mut commands: Commands,
    handles: Option<Res<SpriteHandles>>,
    q_balls: Query<(Entity, &BallRadius, &DrawScale, &SpriteId), With<Ball>>,
) {
    let Some(handles) = handles else {
        return;
    };
    for (body, radius, scale, sprite) in &q_balls {
        commands.spawn((
            Name::new(format!("BallSprite[{}]", sprite.name())),
            Sprite {
                image: handles.ball(*sprite),
                anchor: Anchor::TopLeft,
                ..default()
            },
            BallVisual {
                body,
                radius: radius.0,
                scale: scale.0,
            },
            Transform::default(),
        ));
    }
}

/// Places every ball sprite from its body's position and angle after the physics writeback.
pub fn draw_balls(
    cfg: Res<GameConfig>,
    q_bodies: Query<&Transform, (With<Ball>, Without<BallVisual>)>,
    mut q_visuals: Query<(&BallVisual, &mut Transform), Without<Ball>>,
) {
    let origin = cfg.window.screen_origin();
    for (visual, mut transform) in &mut q_visuals {
        let Ok(body) = q_bodies.get(visual.body) else {
            continue;
        };
        let screen = screen_transform(
            origin,
            body.translation.truncate(),
            body_angle(body),
            visual.radius,
            visual.scale,
        );
        *transform = screen_to_world(origin, screen, BALL_Z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const ORIGIN: Vec2 = Vec2::new(540.0, 320.0);

    fn close(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, 1e-3)
    }

    #[test]
    fn resting_ball_centre_lands_on_offset_position() {
        // Ball #1 of the default scene: (-300, -100), r = 75, scale 1, not rotated.
        let m = screen_transform(ORIGIN, Vec2::new(-300.0, -100.0), 0.0, 75.0, 1.0);
        assert!(close(m.transform_point2(Vec2::splat(75.0)), Vec2::new(240.0, 420.0)));
        assert!(close(m.transform_point2(Vec2::ZERO), Vec2::new(165.0, 345.0)));
    }

    #[test]
    fn scale_shrinks_around_the_centre() {
        let m = screen_transform(ORIGIN, Vec2::new(-320.0, 250.0), 0.0, 75.0, 0.4);
        assert!(close(m.transform_point2(Vec2::splat(75.0)), Vec2::new(220.0, 70.0)));
        // the 150px sprite is drawn 60px wide, matching the 30-unit collider radius
        let left = m.transform_point2(Vec2::new(0.0, 75.0));
        let right = m.transform_point2(Vec2::new(150.0, 75.0));
        assert!((right.x - left.x - 60.0).abs() < 1e-3);
    }

    #[test]
    fn positive_body_angle_turns_counter_clockwise_on_screen() {
        // Screen y points down, so the negated angle keeps the visible rotation counter-clockwise.
        let m = screen_transform(ORIGIN, Vec2::ZERO, FRAC_PI_2, 50.0, 1.0);
        let centre = m.transform_point2(Vec2::splat(50.0));
        let right_edge = m.transform_point2(Vec2::new(100.0, 50.0));
        assert!(close(centre, ORIGIN));
        assert!(close(right_edge - centre, Vec2::new(0.0, -50.0)));
    }

    #[test]
    fn world_transform_keeps_sprite_centre_on_body() {
        let pos = Vec2::new(-200.0, 100.0);
        for angle in [0.0, 0.7, -2.1] {
            let (r, s) = (50.0, 1.5);
            let t = screen_to_world(ORIGIN, screen_transform(ORIGIN, pos, angle, r, s), BALL_Z);
            // top-left anchored sprite: its centre is at local (r, -r)
            let centre = t.transform_point(Vec3::new(r, -r, 0.0));
            assert!(close(centre.truncate(), pos), "angle {angle}: {centre:?}");
            assert!((body_angle(&t) - angle).abs() < 1e-4);
            assert!((t.scale.x - s).abs() < 1e-5 && (t.scale.y - s).abs() < 1e-5);
            assert_eq!(t.translation.z, BALL_Z);
        }
    }

    #[test]
    fn identity_maps_to_top_left_of_window() {
        let t = screen_to_world(ORIGIN, Affine2::IDENTITY, 0.0);
        assert!(close(t.translation.truncate(), Vec2::new(-540.0, 320.0)));
        assert_eq!(t.scale, Vec3::ONE);
    }
}
