pub mod config;

pub use config::{
    BallMaterialConfig, BallSpec, ConfigLoadReport, GameConfig, PhysicsConfig, SceneConfig,
    WindowConfig, DEFAULT_CONFIG_PATH, LOCAL_CONFIG_PATH,
};
