pub mod arena;
pub mod rapier;
