//! RAW frame module
//!
//! Reading packed sensor frames from a byte source and expanding their
//! samples into an 8-bit plane.

mod reader;
mod stream_reader;
pub mod types;
pub mod unpack;

pub use reader::RawFrameReader;
pub use stream_reader::StreamFrameReader;
pub use types::{MissingBytePolicy, RawFrame, SamplePlane};
pub use unpack::unpack;
