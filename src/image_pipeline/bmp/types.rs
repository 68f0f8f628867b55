//! BMP header types
//!
//! All fields are little-endian and packed without padding: a 14-byte file
//! header followed by a 40-byte `BITMAPINFOHEADER`.

use crate::image_pipeline::common::error::{ConversionError, Result};

pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
/// Offset of the pixel payload; no color table follows the headers.
pub const BMP_HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// `biClrUsed` value written for 24-bit output. Conventionally 0 for images
/// without a color table; kept at 2^24 for byte-exact compatibility with
/// existing converter output.
pub const RGB24_COLORS_USED: u32 = 1 << 24;

/// The header at the start of every BMP file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpFileHeader {
    /// Always `b"BM"`
    pub tag: [u8; 2],
    /// Total size of the file in bytes
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte index within the file where the pixel data starts
    pub pixel_data_offset: u32,
}

impl From<BmpFileHeader> for [u8; FILE_HEADER_LEN] {
    fn from(h: BmpFileHeader) -> Self {
        let mut a = [0; FILE_HEADER_LEN];
        a[0..2].copy_from_slice(&h.tag);
        a[2..6].copy_from_slice(&h.file_size.to_le_bytes());
        a[6..8].copy_from_slice(&h.reserved1.to_le_bytes());
        a[8..10].copy_from_slice(&h.reserved2.to_le_bytes());
        a[10..14].copy_from_slice(&h.pixel_data_offset.to_le_bytes());
        a
    }
}

/// `BITMAPINFOHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    /// 0 for uncompressed RGB
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: u32,
    pub y_pels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl From<BmpInfoHeader> for [u8; INFO_HEADER_LEN] {
    fn from(h: BmpInfoHeader) -> Self {
        let mut a = [0; INFO_HEADER_LEN];
        a[0..4].copy_from_slice(&h.header_size.to_le_bytes());
        a[4..8].copy_from_slice(&h.width.to_le_bytes());
        a[8..12].copy_from_slice(&h.height.to_le_bytes());
        a[12..14].copy_from_slice(&h.planes.to_le_bytes());
        a[14..16].copy_from_slice(&h.bits_per_pixel.to_le_bytes());
        a[16..20].copy_from_slice(&h.compression.to_le_bytes());
        a[20..24].copy_from_slice(&h.image_size.to_le_bytes());
        a[24..28].copy_from_slice(&h.x_pels_per_meter.to_le_bytes());
        a[28..32].copy_from_slice(&h.y_pels_per_meter.to_le_bytes());
        a[32..36].copy_from_slice(&h.colors_used.to_le_bytes());
        a[36..40].copy_from_slice(&h.colors_important.to_le_bytes());
        a
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: BmpFileHeader,
    pub info: BmpInfoHeader,
}

impl BmpHeaders {
    /// Headers for an uncompressed 24-bit image whose payload is `rgb_len` bytes.
    pub fn for_rgb24(width: usize, height: usize, rgb_len: usize) -> Result<Self> {
        let invalid = || ConversionError::InvalidDimensions(width, height);
        let image_size = u32::try_from(rgb_len).map_err(|_| invalid())?;
        let file_size = image_size
            .checked_add(BMP_HEADER_LEN as u32)
            .ok_or_else(invalid)?;

        Ok(Self {
            file: BmpFileHeader {
                tag: *b"BM",
                file_size,
                reserved1: 0,
                reserved2: 0,
                pixel_data_offset: BMP_HEADER_LEN as u32,
            },
            info: BmpInfoHeader {
                header_size: INFO_HEADER_LEN as u32,
                width: u32::try_from(width).map_err(|_| invalid())?,
                height: u32::try_from(height).map_err(|_| invalid())?,
                planes: 1,
                bits_per_pixel: 24,
                compression: 0,
                image_size,
                x_pels_per_meter: 0,
                y_pels_per_meter: 0,
                colors_used: RGB24_COLORS_USED,
                colors_important: 0,
            },
        })
    }

    pub fn to_bytes(&self) -> [u8; BMP_HEADER_LEN] {
        let mut a = [0; BMP_HEADER_LEN];
        a[..FILE_HEADER_LEN].copy_from_slice(&<[u8; FILE_HEADER_LEN]>::from(self.file));
        a[FILE_HEADER_LEN..].copy_from_slice(&<[u8; INFO_HEADER_LEN]>::from(self.info));
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes_for_four_by_four() {
        let headers = BmpHeaders::for_rgb24(4, 4, 48).unwrap();
        let bytes = headers.to_bytes();

        #[rustfmt::skip]
        let expected: [u8; 54] = [
            b'B', b'M',
            102, 0, 0, 0,  // bfSize
            0, 0, 0, 0,    // reserved
            54, 0, 0, 0,   // bfOffBits
            40, 0, 0, 0,   // biSize
            4, 0, 0, 0,    // biWidth
            4, 0, 0, 0,    // biHeight
            1, 0,          // biPlanes
            24, 0,         // biBitCount
            0, 0, 0, 0,    // biCompression
            48, 0, 0, 0,   // biSizeImage
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 1,    // biClrUsed = 16777216
            0, 0, 0, 0,    // biClrImportant
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_size_fields_track_payload() {
        let headers = BmpHeaders::for_rgb24(640, 480, 640 * 480 * 3).unwrap();
        assert_eq!(headers.file.pixel_data_offset, 54);
        assert_eq!(headers.file.file_size, 54 + 640 * 480 * 3);
        assert_eq!(headers.info.image_size, 640 * 480 * 3);
    }

    #[test]
    fn test_payload_too_large_for_header() {
        let result = BmpHeaders::for_rgb24(1, 1, u32::MAX as usize);
        assert!(matches!(result, Err(ConversionError::InvalidDimensions(1, 1))));
    }
}
