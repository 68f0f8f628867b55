use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::RgbBuffer;

pub trait BmpWriter {
    fn write_bmp(&self, image: &RgbBuffer, output: &mut dyn Write) -> Result<()>;
}
