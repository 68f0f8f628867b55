//! Conversion requests as supplied by a front end.
//!
//! A request carries the loosely typed inputs a caller collected (numeric
//! conversion selector, optional paths) and resolves them into a validated
//! [`ConversionConfig`] before any file is opened.

use std::path::PathBuf;

use tracing::info;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::config::{ConversionConfig, ConversionType};
use crate::image_pipeline::conversions::raw_to_bmp::RawToBmpPipeline;
use crate::image_pipeline::debayer::types::EdgePolicy;

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub width: usize,
    pub height: usize,
    /// Overrides the bit depth implied by the conversion type
    pub bit_depth: Option<u32>,
    /// Numeric conversion type, 1 for 10-bit BGGR to 24-bit BMP
    pub selector: u32,
    pub input: Option<PathBuf>,
    /// Defaults to the input path with a `.bmp` extension
    pub output: Option<PathBuf>,
    pub edge_policy: EdgePolicy,
}

impl ConversionRequest {
    pub fn config(&self) -> Result<ConversionConfig> {
        let conversion = ConversionType::from_selector(self.selector)?;
        let mut builder = ConversionConfig::builder()
            .conversion(conversion)
            .width(self.width)
            .height(self.height)
            .edge_policy(self.edge_policy);
        if let Some(bit_depth) = self.bit_depth {
            builder = builder.bit_depth(bit_depth);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Resolves and runs the request, returning the path written.
    pub fn run(&self) -> Result<PathBuf> {
        let config = self.config()?;
        let input = self.input.as_ref().ok_or(ConversionError::MissingInputPath)?;

        info!(
            "width: {}, height: {}, bits per pixel: {}",
            config.width, config.height, config.bit_depth
        );

        let pipeline = RawToBmpPipeline::new(config);
        match &self.output {
            Some(output) => {
                pipeline.convert_file(input, output)?;
                Ok(output.clone())
            }
            None => pipeline.convert_path(input),
        }
    }
}
