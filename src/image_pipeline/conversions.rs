//! Pipeline conversions module
//!
//! This module contains orchestration logic for raw to bitmap conversion.

mod raw_to_bmp;
mod request;
mod timing;


pub use raw_to_bmp::{bmp_output_path, RawToBmpPipeline};
pub use request::ConversionRequest;
pub use timing::{PipelineTimings, StepTiming, Timer};
