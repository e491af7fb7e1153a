use bevy::prelude::*;
use golflick::core::config::GameConfig;
use golflick::rendering::draw::{body_angle, BallDrawPlugin};
use golflick::rendering::sprites::SpriteHandles;
use golflick::{Ball, BallVisual, SimulationPlugin};

fn app_with_visuals() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(GameConfig::default())
        .insert_resource(SpriteHandles::default())
        .add_plugins((SimulationPlugin, BallDrawPlugin));
    app
}

#[test]
fn one_visual_per_body() {
    let mut app = app_with_visuals();
    app.update();
    let world = app.world_mut();
    let mut q_visuals = world.query::<&BallVisual>();
    let visuals: Vec<_> = q_visuals.iter(world).copied().collect();
    assert_eq!(visuals.len(), 4);
    for v in &visuals {
        assert!(world.get::<Ball>(v.body).is_some(), "visual points at a non-ball");
    }
}

#[test]
fn sprites_follow_their_bodies() {
    let mut app = app_with_visuals();
    for _ in 0..90 {
        app.update();
    }
    let world = app.world_mut();
    let mut q_visuals = world.query::<(&BallVisual, &Transform)>();
    let placed: Vec<_> = q_visuals
        .iter(world)
        .map(|(v, t)| (*v, *t))
        .collect();
    for (visual, sprite_tf) in placed {
        let body_tf = *world.get::<Transform>(visual.body).expect("body transform");
        // top-left anchored sprite: centre at local (r, -r)
        let centre = sprite_tf.transform_point(Vec3::new(visual.radius, -visual.radius, 0.0));
        assert!(
            centre.truncate().abs_diff_eq(body_tf.translation.truncate(), 1e-2),
            "sprite centre {centre:?} vs body {:?}",
            body_tf.translation
        );
        assert!((body_angle(&sprite_tf) - body_angle(&body_tf)).abs() < 1e-3);
        assert!((sprite_tf.scale.x - visual.scale).abs() < 1e-5);
    }
}
