pub mod colors;
pub mod merger;
pub mod normalizer;

pub use colors::{color_for, DEFAULT_COLOR};
pub use normalizer::{normalize_radar, CANONICAL_AXES};
