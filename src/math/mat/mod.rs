mod mat22;
mod index;
/// Text format
mod text;

pub use mat22::Mat22;
pub use index::{MatIndex, OutOfBoundsError};
pub use text::ParseMatError;
