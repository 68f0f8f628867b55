//! Types for debayering operations

/// RGB image data after debayering
#[derive(Debug, Clone)]
pub struct RgbBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved [B, G, R, B, G, R, ...], row-major, no row padding
    pub data: Vec<u8>,
}

/// Color filter array layouts, named by the top-left 2x2 cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfaPattern {
    Bggr,
    Rggb,
    Grbg,
    Gbrg,
}

/// Behavior for reads that land past the end of the sample plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Reuse the last sample of the plane
    Replicate,
    /// Fail with `ConversionError::SampleOutOfBounds`
    Error,
}
