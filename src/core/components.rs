use bevy::prelude::*;
use serde::Deserialize;

/// Marker component identifying a dynamic ball body (holds the Rapier body & collider).
#[derive(Component)]
pub struct Ball;

/// Base radius of the ball sprite in pixels, before the draw scale is applied.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Uniform draw scale. Also scales the collider: physical radius is `radius * scale`.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct DrawScale(pub f32);

/// Which embedded sprite a ball is drawn with.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum SpriteId {
    Ball1,
    Ball2,
}

impl SpriteId {
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::Ball1 => "ball1",
            SpriteId::Ball2 => "ball2",
        }
    }
}

impl TryFrom<String> for SpriteId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ball1" => Ok(SpriteId::Ball1),
            "ball2" => Ok(SpriteId::Ball2),
            other => Err(format!("unknown sprite {other:?} (expected \"ball1\" or \"ball2\")")),
        }
    }
}

/// Static boundary edge (ground or wall).
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArenaEdge {
    Ground,
    LeftWall,
    RightWall,
    TopWall,
}

/// Render-side half of a ball: a sprite entity pointing at the body it follows.
/// The body is owned by the physics world; the visual only reads it.
#[derive(Component, Debug, Copy, Clone)]
pub struct BallVisual {
    pub body: Entity,
    pub radius: f32,
    pub scale: f32,
}

/// Tag for the full-window background sprite.
#[derive(Component)]
pub struct Background;
