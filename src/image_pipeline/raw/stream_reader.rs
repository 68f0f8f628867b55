//! Packed frame reader for plain byte streams.
//!
//! Raw sensor dumps carry no header: the frame is exactly
//! `ceil(width * height * bit_depth / 8)` bytes and its geometry comes from
//! the conversion configuration.

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::image_pipeline::common::alloc_buffer;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::raw::reader::RawFrameReader;
use crate::image_pipeline::raw::types::RawFrame;

/// Reads a headerless packed frame from any [`Read`] source.
pub struct StreamFrameReader;

impl RawFrameReader for StreamFrameReader {
    /// Reads exactly the number of bytes the configured frame occupies.
    ///
    /// Bytes after the frame are left unread. A source that ends early
    /// yields [`ConversionError::ShortRead`] rather than a partially filled
    /// frame.
    fn read_frame(&self, source: &mut dyn Read, config: &ConversionConfig) -> Result<RawFrame> {
        let expected = config.raw_frame_len();
        debug!("Reading raw frame, {} bytes expected", expected);

        let mut data = alloc_buffer("raw frame", expected)?;
        let mut filled = 0;
        while filled < expected {
            match source.read(&mut data[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if filled < expected {
            return Err(ConversionError::ShortRead {
                expected,
                got: filled,
            });
        }

        Ok(RawFrame {
            width: config.width,
            height: config.height,
            bit_depth: config.bit_depth,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Hands out at most `chunk` bytes per read.
    struct TrickleReader {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl Read for TrickleReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    fn config(width: usize, height: usize) -> ConversionConfig {
        ConversionConfig::builder().width(width).height(height).build()
    }

    #[test]
    fn test_reads_exact_frame_length() {
        // 4x2 at 10 bits is 80 bits, 10 bytes; extra trailing bytes are ignored
        let input: Vec<u8> = (0..16).collect();
        let frame = StreamFrameReader
            .read_frame(&mut Cursor::new(input), &config(4, 2))
            .unwrap();

        assert_eq!(frame.data, (0..10).collect::<Vec<u8>>());
        assert_eq!(frame.bit_depth, 10);
    }

    #[test]
    fn test_collects_across_partial_reads() {
        let mut source = TrickleReader {
            data: (0..10).collect(),
            pos: 0,
            chunk: 3,
        };
        let frame = StreamFrameReader.read_frame(&mut source, &config(4, 2)).unwrap();
        assert_eq!(frame.data.len(), 10);
        assert_eq!(frame.data[9], 9);
    }

    #[test]
    fn test_short_input_is_reported() {
        let result = StreamFrameReader.read_frame(&mut Cursor::new(vec![0u8; 7]), &config(4, 2));
        assert!(matches!(
            result,
            Err(ConversionError::ShortRead {
                expected: 10,
                got: 7
            })
        ));
    }
}
