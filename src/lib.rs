//! Generic 2D and 3D vector types.
//!
//! ```
//! use vecmath::core::prelude::*;
//!
//! let sum = Vector3::new(1, 0, 0) + Vector3::new(0, 1, 0) + Vector3::new(0, 0, 1);
//! assert_eq!(sum.to_string(), "X: 1, Y: 1, Z: 1");
//! ```

pub mod core;
pub mod util;
