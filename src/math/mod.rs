mod vec2;
pub use vec2::Vec2;

pub mod mat;
