//! RAW frame data types

/// Packed sensor samples exactly as read from the input
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Bits per packed sample (e.g., 8, 10 or 12)
    pub bit_depth: u32,
    /// Row-major samples, packed LSB first
    pub data: Vec<u8>,
}

/// One byte per pixel, scaled to the full 8-bit range
#[derive(Debug, Clone)]
pub struct SamplePlane {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` bytes
    pub data: Vec<u8>,
}

/// Handling of sample bits that lie past the end of a raw frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingBytePolicy {
    /// Missing bits read as zero
    ZeroFill,
    /// Fail with `ConversionError::TruncatedFrame`
    Error,
}
