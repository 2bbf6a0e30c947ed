//! 2x2 matrix and 2D vector value types.
//!
//! ```
//! use mat22::{Mat22, Vec2};
//!
//! let m = Mat22::new(4., 7., 2., 6.);
//! assert_eq!(m.det(), 10.);
//! assert_eq!(Mat22::new(1., 2., 3., 4.) * Vec2::new(1., 1.), Vec2::new(3., 7.));
//! ```

pub mod math;
mod error;

pub use error::MatError;
pub use math::Vec2;
pub use math::mat::{Mat22, MatIndex, OutOfBoundsError, ParseMatError};
