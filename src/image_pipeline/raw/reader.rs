use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::raw::types::RawFrame;

pub trait RawFrameReader {
    fn read_frame(&self, source: &mut dyn Read, config: &ConversionConfig) -> Result<RawFrame>;
}
