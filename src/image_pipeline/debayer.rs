//! Debayering module for converting Bayer pattern sample planes to RGB

mod nearest_debayer;
pub mod types;

pub use nearest_debayer::NearestDebayer;
pub use types::{CfaPattern, EdgePolicy, RgbBuffer};
