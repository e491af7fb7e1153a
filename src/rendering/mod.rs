pub mod background;
pub mod camera;
pub mod draw;
pub mod sprites;
