//! Conversion configuration types

use crate::image_pipeline::bmp::types::BMP_HEADER_LEN;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::types::{CfaPattern, EdgePolicy};
use crate::image_pipeline::raw::types::MissingBytePolicy;

/// Largest accepted bit depth for packed samples.
pub const MAX_BIT_DEPTH: u32 = 16;

/// Conversions the pipeline knows how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionType {
    /// 10-bit packed BGGR raw to 24-bit BMP
    Raw10BggrToBmp24,
}

impl ConversionType {
    /// Maps the numeric selector used on the command line.
    pub fn from_selector(selector: u32) -> Result<Self> {
        match selector {
            1 => Ok(Self::Raw10BggrToBmp24),
            other => Err(ConversionError::UnsupportedConversion(other)),
        }
    }

    pub fn selector(self) -> u32 {
        match self {
            Self::Raw10BggrToBmp24 => 1,
        }
    }

    pub fn bit_depth(self) -> u32 {
        match self {
            Self::Raw10BggrToBmp24 => 10,
        }
    }

    pub fn pattern(self) -> CfaPattern {
        match self {
            Self::Raw10BggrToBmp24 => CfaPattern::Bggr,
        }
    }
}

/// Configuration for RAW to BMP conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Frame width in pixels
    pub width: usize,
    /// Frame height in pixels
    pub height: usize,
    /// Bits per packed sample in the input
    pub bit_depth: u32,
    /// Color filter layout of the sensor
    pub pattern: CfaPattern,
    pub conversion: ConversionType,
    /// What the demosaicer does with reads past the end of the plane
    pub edge_policy: EdgePolicy,
    /// What the unpacker does when the last sample's high byte is absent
    pub missing_byte_policy: MissingBytePolicy,
    /// Upper bound on either dimension; `None` disables the check
    pub max_dimension: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        let conversion = ConversionType::Raw10BggrToBmp24;
        Self {
            width: 0,
            height: 0,
            bit_depth: conversion.bit_depth(),
            pattern: conversion.pattern(),
            conversion,
            edge_policy: EdgePolicy::Replicate,
            missing_byte_policy: MissingBytePolicy::ZeroFill,
            max_dimension: Some(u16::MAX as usize),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Byte length of the packed frame, rounded up to a whole byte.
    pub fn raw_frame_len(&self) -> usize {
        (self.pixel_count() * self.bit_depth as usize).div_ceil(8)
    }

    pub fn rgb_len(&self) -> usize {
        self.pixel_count() * 3
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConversionError::InvalidDimensions(self.width, self.height));
        }

        if let Some(max) = self.max_dimension {
            if self.width > max || self.height > max {
                return Err(ConversionError::InvalidDimensions(self.width, self.height));
            }
        }

        if self.bit_depth == 0 || self.bit_depth > MAX_BIT_DEPTH {
            return Err(ConversionError::InvalidArgument(format!(
                "bit depth {} outside 1..={}",
                self.bit_depth, MAX_BIT_DEPTH
            )));
        }

        // biWidth/biHeight are signed and bfSize must hold headers plus payload
        let file_size = self
            .width
            .checked_mul(self.height)
            .and_then(|pixels| pixels.checked_mul(3))
            .and_then(|rgb| rgb.checked_add(BMP_HEADER_LEN));
        let fits_header = self.width <= i32::MAX as usize
            && self.height <= i32::MAX as usize
            && file_size.is_some_and(|size| size <= u32::MAX as usize);
        if !fits_header {
            return Err(ConversionError::InvalidDimensions(self.width, self.height));
        }

        Ok(())
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    bit_depth: Option<u32>,
    pattern: Option<CfaPattern>,
    conversion: Option<ConversionType>,
    edge_policy: Option<EdgePolicy>,
    missing_byte_policy: Option<MissingBytePolicy>,
    max_dimension: Option<Option<usize>>,
}

impl ConversionConfigBuilder {
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn bit_depth(mut self, bit_depth: u32) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    pub fn pattern(mut self, pattern: CfaPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Selects the conversion; its bit depth and pattern apply unless set explicitly.
    pub fn conversion(mut self, conversion: ConversionType) -> Self {
        self.conversion = Some(conversion);
        self
    }

    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = Some(policy);
        self
    }

    pub fn missing_byte_policy(mut self, policy: MissingBytePolicy) -> Self {
        self.missing_byte_policy = Some(policy);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        let conversion = self.conversion.unwrap_or(default.conversion);
        ConversionConfig {
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            bit_depth: self.bit_depth.unwrap_or(conversion.bit_depth()),
            pattern: self.pattern.unwrap_or(conversion.pattern()),
            conversion,
            edge_policy: self.edge_policy.unwrap_or(default.edge_policy),
            missing_byte_policy: self.missing_byte_policy.unwrap_or(default.missing_byte_policy),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .width(640)
            .height(480)
            .bit_depth(12)
            .edge_policy(EdgePolicy::Error)
            .missing_byte_policy(MissingBytePolicy::Error)
            .max_dimension(None)
            .build();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.bit_depth, 12);
        assert_eq!(config.pattern, CfaPattern::Bggr);
        assert_eq!(config.edge_policy, EdgePolicy::Error);
        assert_eq!(config.missing_byte_policy, MissingBytePolicy::Error);
        assert_eq!(config.max_dimension, None);
    }

    #[test]
    fn test_defaults_follow_conversion_type() {
        let config = ConversionConfig::builder().width(4).height(4).build();
        assert_eq!(config.conversion, ConversionType::Raw10BggrToBmp24);
        assert_eq!(config.bit_depth, 10);
        assert_eq!(config.pattern, CfaPattern::Bggr);
        assert_eq!(config.edge_policy, EdgePolicy::Replicate);
    }

    #[test]
    fn test_selector_round_trip_and_rejection() {
        let conversion = ConversionType::from_selector(1).unwrap();
        assert_eq!(conversion.selector(), 1);
        assert!(matches!(
            ConversionType::from_selector(0),
            Err(ConversionError::UnsupportedConversion(0))
        ));
        assert!(matches!(
            ConversionType::from_selector(2),
            Err(ConversionError::UnsupportedConversion(2))
        ));
    }

    #[test]
    fn test_sizes() {
        let config = ConversionConfig::builder().width(3).height(3).build();
        assert_eq!(config.pixel_count(), 9);
        // 90 bits round up to 12 bytes
        assert_eq!(config.raw_frame_len(), 12);
        assert_eq!(config.rgb_len(), 27);
    }

    #[test]
    fn test_validate() {
        assert!(ConversionConfig::builder().width(4).height(4).build().validate().is_ok());
        assert!(matches!(
            ConversionConfig::builder().width(0).height(4).build().validate(),
            Err(ConversionError::InvalidDimensions(0, 4))
        ));
        assert!(matches!(
            ConversionConfig::builder()
                .width(200)
                .height(4)
                .max_dimension(Some(100))
                .build()
                .validate(),
            Err(ConversionError::InvalidDimensions(200, 4))
        ));
        assert!(matches!(
            ConversionConfig::builder().width(4).height(4).bit_depth(17).build().validate(),
            Err(ConversionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_rejects_geometry_bmp_cannot_hold() {
        // 37000 * 37000 * 3 bytes overflows bfSize
        let oversized = ConversionConfig::builder()
            .width(37_000)
            .height(37_000)
            .max_dimension(None)
            .build();
        assert!(matches!(
            oversized.validate(),
            Err(ConversionError::InvalidDimensions(37_000, 37_000))
        ));

        let too_wide = ConversionConfig::builder()
            .width(i32::MAX as usize + 1)
            .height(1)
            .max_dimension(None)
            .build();
        assert!(matches!(
            too_wide.validate(),
            Err(ConversionError::InvalidDimensions(..))
        ));

        // 2.7 GB of payload still fits a u32 file size
        let fits = ConversionConfig::builder()
            .width(30_000)
            .height(30_000)
            .max_dimension(None)
            .build();
        assert!(fits.validate().is_ok());
    }
}
