pub mod sprites;

pub use sprites::{decode_sprite, EmbeddedSprites, SpriteError, SpriteHandles, SpritesPlugin};
