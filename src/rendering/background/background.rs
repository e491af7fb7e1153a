use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::core::components::Background;
use crate::core::config::GameConfig;
use crate::rendering::draw::screen_to_world;
use crate::rendering::sprites::SpriteHandles;

const BACKGROUND_Z: f32 = -500.0;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_background);
    }
}

/// Grass image drawn untransformed at the screen's top-left corner, behind everything else.
fn setup_background(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    handles: Option<Res<SpriteHandles>>,
) {
    let Some(handles) = handles else {
        return;
    };
    let layout = cfg.window.layout().as_vec2();
    commands.spawn((
        Name::new("Background"),
        Sprite {
            image: handles.grass.clone(),
            anchor: Anchor::TopLeft,
            custom_size: Some(layout),
            ..default()
        },
        screen_to_world(cfg.window.screen_origin(), Affine2::IDENTITY, BACKGROUND_Z),
        Background,
    ));
    info!("Background spawned");
}
