pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{GamePlugin, SimulationPlugin};
pub use crate::core::components::{Ball, BallRadius, BallVisual, DrawScale, SpriteId};
pub use crate::core::config::config::{GameConfig, WindowConfig};
pub use rendering::sprites::{EmbeddedSprites, SpriteError};
