// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod vector;

pub use interval::Interval;
pub use vector::VectorExt;

/// RGB color in [0, 1], stored in a `Vec3`.
pub type Color = Vec3;
