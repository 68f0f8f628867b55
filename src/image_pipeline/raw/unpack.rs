//! Bit unpacking of packed sensor samples.
//!
//! Samples are stored back to back, least significant bit first. A sample
//! whose bits do not fit in the current byte continues in the low bits of
//! the following byte(s). Each extracted value `v` is scaled to
//! `v * 256 / 2^bit_depth`.

use tracing::debug;

use crate::image_pipeline::common::alloc_buffer;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::types::{MissingBytePolicy, RawFrame, SamplePlane};

/// Expands a packed frame into one byte per pixel.
///
/// An 8-bit frame is copied through unchanged. For other depths every byte
/// access is bounds-checked; bits that fall past the end of the frame are
/// resolved by `policy`. A frame that is short by more than the final
/// partial byte is always rejected.
pub fn unpack(frame: &RawFrame, policy: MissingBytePolicy) -> Result<SamplePlane> {
    let pixels = frame.width * frame.height;
    let bit_depth = frame.bit_depth as usize;
    debug!(
        "Unpacking {} samples at {} bits from {} bytes",
        pixels,
        bit_depth,
        frame.data.len()
    );

    let floor_len = pixels * bit_depth / 8;
    if frame.data.len() < floor_len {
        return Err(ConversionError::TruncatedFrame {
            offset: frame.data.len(),
            len: frame.data.len(),
        });
    }

    let mut data = alloc_buffer("sample plane", pixels)?;

    if bit_depth == 8 {
        data.copy_from_slice(&frame.data[..pixels]);
    } else {
        for (i, out) in data.iter_mut().enumerate() {
            let value = extract_sample(&frame.data, bit_depth * i, bit_depth, policy)?;
            *out = (value * 256 / (1 << bit_depth)) as u8;
        }
    }

    Ok(SamplePlane {
        width: frame.width,
        height: frame.height,
        data,
    })
}

fn extract_sample(
    data: &[u8],
    bit_off: usize,
    bit_depth: usize,
    policy: MissingBytePolicy,
) -> Result<u32> {
    let byte_off = bit_off / 8;
    let shift = bit_off % 8;

    let mut value = (byte_at(data, byte_off, policy)? >> shift) as u32;
    let mut consumed = 8 - shift;
    let mut next = byte_off + 1;

    while consumed < bit_depth {
        let remaining = (bit_depth - consumed).min(8);
        let high = byte_at(data, next, policy)? as u32 & ((1 << remaining) - 1);
        value += high << consumed;
        consumed += 8;
        next += 1;
    }

    // non-spanning samples still carry the bits of their neighbours
    Ok(value & ((1 << bit_depth) - 1))
}

fn byte_at(data: &[u8], offset: usize, policy: MissingBytePolicy) -> Result<u8> {
    match (data.get(offset), policy) {
        (Some(&byte), _) => Ok(byte),
        (None, MissingBytePolicy::ZeroFill) => Ok(0),
        (None, MissingBytePolicy::Error) => Err(ConversionError::TruncatedFrame {
            offset,
            len: data.len(),
        }),
    }
}
