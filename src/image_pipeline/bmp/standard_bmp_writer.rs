use std::io::{ErrorKind, Write};

use tracing::debug;

use crate::image_pipeline::bmp::types::BmpHeaders;
use crate::image_pipeline::bmp::writer::BmpWriter;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::types::RgbBuffer;

pub struct StandardBmpWriter;

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: &RgbBuffer, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width, image.height);

        let headers = BmpHeaders::for_rgb24(image.width, image.height, image.data.len())?;
        write_fully(output, &headers.to_bytes())?;
        write_fully(output, &image.data)?;

        output.flush().map_err(|e| ConversionError::WriteFailure {
            written: image.data.len(),
            total: image.data.len(),
            source: Some(e),
        })?;

        debug!("BMP encoding complete");
        Ok(())
    }
}

/// Writes all of `bytes`, resubmitting the unwritten tail after short writes.
///
/// A write that accepts zero bytes, or fails with anything other than
/// `Interrupted`, ends the loop with [`ConversionError::WriteFailure`].
/// Bytes already accepted by `output` stay written.
pub fn write_fully(output: &mut dyn Write, bytes: &[u8]) -> Result<()> {
    let total = bytes.len();
    let mut written = 0;

    while written < total {
        match output.write(&bytes[written..]) {
            Ok(0) => {
                return Err(ConversionError::WriteFailure {
                    written,
                    total,
                    source: None,
                });
            }
            Ok(n) => {
                written += n;
                debug!("Wrote {} bytes, {}/{}", n, written, total);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(ConversionError::WriteFailure {
                    written,
                    total,
                    source: Some(e),
                });
            }
        }
    }

    Ok(())
}
