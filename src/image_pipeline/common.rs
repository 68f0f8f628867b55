//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline.

pub mod buffer;
pub mod error;

pub use buffer::alloc_buffer;
pub use error::{ConversionError, ErrorKind, Result};
