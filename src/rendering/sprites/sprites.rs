//! Embedded raster images. Decoded on the CPU before the app is built so a bad
//! image aborts startup instead of surfacing as a missing texture later.

use std::fmt;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use image::ImageFormat;

use crate::core::components::SpriteId;

const BALL1_PNG: &[u8] = include_bytes!("../../../assets/sprites/ball1.png");
const BALL2_PNG: &[u8] = include_bytes!("../../../assets/sprites/ball2.png");
const GRASS_PNG: &[u8] = include_bytes!("../../../assets/sprites/grass.png");

#[derive(Debug)]
pub struct SpriteError {
    pub name: &'static str,
    pub source: image::ImageError,
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode embedded image `{}`: {}", self.name, self.source)
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub fn decode_sprite(name: &'static str, bytes: &[u8]) -> Result<Image, SpriteError> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|source| SpriteError { name, source })?;
    Ok(Image::from_dynamic(
        decoded,
        true,
        RenderAssetUsages::default(),
    ))
}

/// CPU-side images, inserted by `main` and consumed by `install_sprites`.
#[derive(Resource, Debug, Clone)]
pub struct EmbeddedSprites {
    pub ball1: Image,
    pub ball2: Image,
    pub grass: Image,
}

impl EmbeddedSprites {
    pub fn decode() -> Result<Self, SpriteError> {
        Ok(Self {
            ball1: decode_sprite("ball1", BALL1_PNG)?,
            ball2: decode_sprite("ball2", BALL2_PNG)?,
            grass: decode_sprite("grass", GRASS_PNG)?,
        })
    }
}

/// GPU asset handles shared (read-only) by every sprite that draws them.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteHandles {
    pub ball1: Handle<Image>,
    pub ball2: Handle<Image>,
    pub grass: Handle<Image>,
}

impl SpriteHandles {
    pub fn ball(&self, id: SpriteId) -> Handle<Image> {
        match id {
            SpriteId::Ball1 => self.ball1.clone(),
            SpriteId::Ball2 => self.ball2.clone(),
        }
    }
}

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, install_sprites);
    }
}

pub fn install_sprites(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    sprites: Option<Res<EmbeddedSprites>>,
) {
    let Some(sprites) = sprites else {
        warn!("no embedded sprites inserted; balls and background will not be drawn");
        return;
    };
    let handles = SpriteHandles {
        ball1: images.add(sprites.ball1.clone()),
        ball2: images.add(sprites.ball2.clone()),
        grass: images.add(sprites.grass.clone()),
    };
    commands.insert_resource(handles);
    commands.remove_resource::<EmbeddedSprites>();
    info!("Embedded sprites installed");
}
