use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, io, path::Path};

use crate::core::components::SpriteId;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";
pub const LOCAL_CONFIG_PATH: &str = "assets/config/game.local.ron";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 640.0,
            title: "Waaa!".into(),
            auto_close: 0.0,
        }
    }
}
impl WindowConfig {
    /// Logical screen size. Independent of whatever size the OS hands the window.
    pub fn layout(&self) -> UVec2 {
        UVec2::new(self.width.max(1.0) as u32, self.height.max(1.0) as u32)
    }

    /// Screen-space point that world (0, 0) is drawn at.
    pub fn screen_origin(&self) -> Vec2 {
        self.layout().as_vec2() * 0.5
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_y: f32,
    /// Seconds advanced per frame.
    pub timestep: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -100.0,
            timestep: 1.0 / 60.0,
            velocity_iterations: 8,
            position_iterations: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallMaterialConfig {
    pub friction: f32,
    pub density: f32,
    pub restitution: f32,
    pub angular_damping: f32,
}
impl Default for BallMaterialConfig {
    fn default() -> Self {
        Self {
            friction: 1.0,
            density: 20.0,
            restitution: 0.6,
            angular_damping: 0.75,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallSpec {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub sprite: SpriteId,
    pub scale: f32,
}
impl Default for BallSpec {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 50.0,
            sprite: SpriteId::Ball1,
            scale: 1.0,
        }
    }
}
impl BallSpec {
    pub fn new(x: f32, y: f32, radius: f32, sprite: SpriteId, scale: f32) -> Self {
        Self {
            x,
            y,
            radius,
            sprite,
            scale,
        }
    }

    /// Collider radius: the draw scale applies to the body as well.
    pub fn physical_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub half_width: f32,
    pub half_height: f32,
    /// Friction of the ground and wall edges.
    pub edge_friction: f32,
    pub balls: Vec<BallSpec>,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            half_width: 540.0,
            half_height: 320.0,
            // sqrt(0.2): against the balls' `Min` rule this yields the geometric mean sqrt(1.0 * 0.2).
            edge_friction: 0.2f32.sqrt(),
            balls: vec![
                BallSpec::new(-300.0, -100.0, 75.0, SpriteId::Ball1, 1.0),
                BallSpec::new(-250.0, 200.0, 50.0, SpriteId::Ball2, 1.0),
                BallSpec::new(-320.0, 250.0, 75.0, SpriteId::Ball1, 0.4),
                BallSpec::new(-200.0, 100.0, 50.0, SpriteId::Ball2, 1.5),
            ],
        }
    }
}
impl SceneConfig {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_width && p.y.abs() <= self.half_height
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub material: BallMaterialConfig,
    pub scene: SceneConfig,
    pub rapier_debug: bool,
    /// Seconds between body-state log lines (debug builds). 0.0 disables.
    pub log_interval: f32,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            physics: Default::default(),
            material: Default::default(),
            scene: Default::default(),
            rapier_debug: false,
            log_interval: 2.0,
        }
    }
}

/// Which layers produced the active config and what went wrong on the way.
/// Logged once the log plugin is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

fn merge_value(base: &mut ron::Value, overlay: ron::Value) {
    use ron::Value;
    match (base, overlay) {
        (Value::Map(base_map), Value::Map(overlay_map)) => {
            for (key, incoming) in overlay_map.into_iter() {
                let existing = base_map
                    .iter_mut()
                    .find_map(|(k, v)| (*k == key).then_some(v));
                match existing {
                    Some(existing) => merge_value(existing, incoming),
                    None => {
                        base_map.insert(key, incoming);
                    }
                }
            }
        }
        (b, o) => *b = o,
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of maps).
    /// Missing files are skipped silently; unreadable or malformed ones are reported and skipped.
    /// Returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let mut merged: Option<ron::Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        for p in paths {
            let path_ref = p.as_ref();
            let txt = match fs::read_to_string(path_ref) {
                Ok(txt) => txt,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path_ref.display()));
                    continue;
                }
            };
            match ron::from_str::<ron::Value>(&txt) {
                Ok(val) => {
                    match &mut merged {
                        Some(cur) => merge_value(cur, val),
                        None => merged = Some(val),
                    }
                    used.push(path_ref.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let half_screen = Vec2::new(self.window.width, self.window.height) * 0.5;
        if half_screen != self.scene.half_extents() {
            w.push(format!(
                "arena half extents {:?} differ from half window {:?}; walls will not line up with the screen edges",
                self.scene.half_extents(),
                half_screen
            ));
        }

        let ph = &self.physics;
        if ph.gravity_y.abs() < 1e-4 {
            w.push("physics.gravity_y magnitude near zero; balls will float".into());
        }
        if ph.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); the world is Y-up so balls fall towards the top wall",
                ph.gravity_y
            ));
        }
        if ph.timestep <= 0.0 {
            w.push(format!("physics.timestep {} must be > 0", ph.timestep));
        } else if ph.timestep > 0.1 {
            w.push(format!(
                "physics.timestep {} very large; bodies may tunnel through edges",
                ph.timestep
            ));
        }
        if ph.velocity_iterations == 0 {
            w.push("physics.velocity_iterations is 0; clamped to 1".into());
        }

        let m = &self.material;
        if !(0.0..=1.0).contains(&m.restitution) {
            w.push(format!("material.restitution {} outside 0..1", m.restitution));
        }
        if m.density <= 0.0 {
            w.push(format!("material.density {} must be > 0", m.density));
        }
        if m.friction < 0.0 {
            w.push(format!("material.friction {} negative", m.friction));
        }
        if m.angular_damping < 0.0 {
            w.push(format!("material.angular_damping {} negative", m.angular_damping));
        }

        if self.scene.half_width <= 0.0 || self.scene.half_height <= 0.0 {
            w.push("scene half extents must be > 0".into());
        }
        if self.scene.balls.is_empty() {
            w.push("scene.balls is empty; nothing will spawn".into());
        }
        for (i, b) in self.scene.balls.iter().enumerate() {
            if b.radius <= 0.0 {
                w.push(format!("scene.balls[{i}].radius {} must be > 0", b.radius));
            }
            if b.scale <= 0.0 {
                w.push(format!("scene.balls[{i}].scale {} must be > 0", b.scale));
            }
            let r = b.physical_radius();
            if b.x.abs() + r > self.scene.half_width || b.y.abs() + r > self.scene.half_height {
                w.push(format!(
                    "scene.balls[{i}] at ({}, {}) with radius {r} overlaps the arena boundary",
                    b.x, b.y
                ));
            }
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_literal_scene() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.window.layout(), UVec2::new(1080, 640));
        assert_eq!(cfg.window.title, "Waaa!");
        assert_eq!(cfg.physics.gravity_y, -100.0);
        assert_eq!(cfg.physics.velocity_iterations, 8);
        assert_eq!(cfg.physics.position_iterations, 3);
        assert_eq!(cfg.scene.balls.len(), 4);
        assert_eq!(cfg.scene.balls[2].sprite, SpriteId::Ball1);
        assert!((cfg.scene.balls[2].physical_radius() - 30.0).abs() < 1e-4);
        assert_eq!(cfg.scene.balls[3].sprite, SpriteId::Ball2);
    }

    #[test]
    fn default_config_has_no_warnings() {
        let warnings = GameConfig::default().validate();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn screen_origin_is_half_layout() {
        assert_eq!(
            WindowConfig::default().screen_origin(),
            Vec2::new(540.0, 320.0)
        );
    }

    #[test]
    fn merge_overrides_nested_keys_only() {
        let mut base: ron::Value =
            ron::from_str("(physics: (gravity_y: -100.0, timestep: 0.5), rapier_debug: false)")
                .unwrap();
        let overlay: ron::Value = ron::from_str("(physics: (gravity_y: -9.0))").unwrap();
        merge_value(&mut base, overlay);
        let cfg: GameConfig = base.into_rust().unwrap();
        assert_eq!(cfg.physics.gravity_y, -9.0);
        assert_eq!(cfg.physics.timestep, 0.5);
    }

    #[test]
    fn merge_inserts_keys_missing_from_base() {
        let mut base: ron::Value = ron::from_str("(physics: (gravity_y: -100.0))").unwrap();
        let overlay: ron::Value =
            ron::from_str("(physics: (timestep: 0.25), window: (title: \"Hi\"))").unwrap();
        merge_value(&mut base, overlay);
        let cfg: GameConfig = base.into_rust().unwrap();
        assert_eq!(cfg.physics.gravity_y, -100.0);
        assert_eq!(cfg.physics.timestep, 0.25);
        assert_eq!(cfg.window.title, "Hi");
    }

    #[test]
    fn scene_contains_checks_both_axes() {
        let scene = SceneConfig::default();
        assert!(scene.contains(Vec2::new(-540.0, 320.0)));
        assert!(!scene.contains(Vec2::new(541.0, 0.0)));
        assert!(!scene.contains(Vec2::new(0.0, -320.5)));
    }

    #[test]
    fn sprite_names_parse() {
        let spec: BallSpec = ron::from_str(r#"(sprite: "ball2", radius: 10.0)"#).unwrap();
        assert_eq!(spec.sprite, SpriteId::Ball2);
        assert_eq!(spec.scale, 1.0);
        assert!(ron::from_str::<BallSpec>(r#"(sprite: "ball9")"#).is_err());
    }
}
