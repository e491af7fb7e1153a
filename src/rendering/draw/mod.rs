pub mod draw;

pub use draw::{body_angle, screen_to_world, screen_transform, BallDrawPlugin};
