//! Image processing pipeline module
//!
//! Packed raw Bayer frames are read, unpacked to 8-bit samples, debayered
//! and written out as uncompressed 24-bit BMP files.

pub mod bmp;
pub mod common;
pub mod config;
pub mod conversions;
pub mod debayer;
pub mod raw;

pub use common::{
    ConversionError,
    ErrorKind,
    Result,
};

pub use config::{
    ConversionConfig,
    ConversionConfigBuilder,
    ConversionType,
};

pub use raw::{
    MissingBytePolicy,
    RawFrame,
    RawFrameReader,
    SamplePlane,
    StreamFrameReader,
};

pub use debayer::{
    CfaPattern,
    EdgePolicy,
    NearestDebayer,
    RgbBuffer,
};

pub use bmp::{
    BmpHeaders,
    BmpWriter,
    StandardBmpWriter,
};

pub use conversions::{
    bmp_output_path,
    ConversionRequest,
    PipelineTimings,
    RawToBmpPipeline,
};
