//! Central system ordering labels to make the startup and frame sequence explicit.
//! Startup:
//! 1. SceneSet::Bodies (arena edges + ball bodies)
//! 2. SceneSet::Visuals (sprites paired with the bodies spawned above)
//!
//! Frame (PostUpdate):
//! 1. Rapier step + writeback (handled by plugin)
//! 2. DrawSet (ball sprites read the freshly written body transforms)
//! 3. Transform propagation (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SceneSet {
    Bodies,
    Visuals,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DrawSet; // sprite placement after physics writeback
