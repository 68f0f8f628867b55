//! BMP writing module
//!
//! Header layout for uncompressed 24-bit bitmaps and a streaming writer that
//! emits the headers followed by the pixel payload.

pub mod types;
mod writer;
mod standard_bmp_writer;

pub use types::{BmpFileHeader, BmpHeaders, BmpInfoHeader, BMP_HEADER_LEN};
pub use writer::BmpWriter;
pub use standard_bmp_writer::{write_fully, StandardBmpWriter};
