//! Conversion configuration module
//!
//! Holds the immutable parameters handed to a pipeline: frame geometry,
//! sample depth, CFA layout and the boundary policies.

pub mod types;

pub use types::{ConversionConfig, ConversionConfigBuilder, ConversionType};
