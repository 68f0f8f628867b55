use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, info_span, instrument};

use crate::image_pipeline::{
    bmp::{BmpWriter, StandardBmpWriter},
    common::error::{ConversionError, Result},
    config::ConversionConfig,
    conversions::timing::{PipelineTimings, Timer},
    debayer::{NearestDebayer, RgbBuffer},
    raw::{unpack, RawFrameReader, StreamFrameReader},
};

pub struct RawToBmpPipeline<R: RawFrameReader, W: BmpWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl RawToBmpPipeline<StreamFrameReader, StandardBmpWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StreamFrameReader,
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<R: RawFrameReader, W: BmpWriter> RawToBmpPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input, output), fields(width = self.config.width, height = self.config.height))]
    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input, output).map(|_| ())
    }

    /// Runs read, unpack, debayer and encode, timing each stage.
    ///
    /// Every intermediate buffer is dropped as soon as the next stage has
    /// consumed it, and on any early return.
    pub fn convert_with_timings(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting RAW to BMP conversion");

        self.config.validate()?;
        let rgb = self.decode(input, &mut timings)?;
        self.encode(&rgb, output, &mut timings)?;

        Ok(timings)
    }

    /// Reads the packed frame and turns it into the RGB payload.
    fn decode(&self, input: &mut dyn Read, timings: &mut PipelineTimings) -> Result<RgbBuffer> {
        let timer = Timer::start("read_raw");
        let frame = {
            let _span = info_span!("read_raw").entered();
            self.reader.read_frame(input, &self.config)?
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("unpack");
        let plane = {
            let _span = info_span!("unpack", bit_depth = frame.bit_depth).entered();
            unpack(&frame, self.config.missing_byte_policy)?
        };
        drop(frame);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("debayer");
        let rgb = {
            let _span = info_span!("debayer").entered();
            NearestDebayer::new(self.config.pattern, self.config.edge_policy).process(&plane)?
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok(rgb)
    }

    fn encode(
        &self,
        rgb: &RgbBuffer,
        output: &mut dyn Write,
        timings: &mut PipelineTimings,
    ) -> Result<()> {
        let timer = Timer::start("encode_bmp");
        {
            let _span = info_span!("encode_bmp").entered();
            self.writer.write_bmp(rgb, output)?;
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        info!(
            width = rgb.width,
            height = rgb.height,
            "Conversion complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        timings.log_breakdown();
        Ok(())
    }

    /// Converts `input_path` into a new bitmap at `output_path`.
    ///
    /// The whole input is decoded before the output is created, so a failed
    /// read leaves no output behind and `output_path` may name the input
    /// itself.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();
        let mut timings = PipelineTimings::new();

        self.config.validate()?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let rgb = {
            let mut input_file = {
                let _span = info_span!("open_input_file").entered();
                File::open(input_path).map_err(|source| ConversionError::OpenFailure {
                    path: input_path.to_path_buf(),
                    source,
                })?
            };
            self.decode(&mut input_file, &mut timings)?
        };

        let mut output_file = {
            let _span = info_span!("create_output_file").entered();
            File::create(output_path).map_err(|source| ConversionError::OpenFailure {
                path: output_path.to_path_buf(),
                source,
            })?
        };

        self.encode(&rgb, &mut output_file, &mut timings)
    }

    /// Converts `input_path` into a bitmap beside it, see [`bmp_output_path`].
    pub fn convert_path<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let output_path = bmp_output_path(input_path.as_ref());
        self.convert_file(input_path, &output_path)?;
        Ok(output_path)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}

/// Replaces the extension of the file name with `bmp`, or appends one.
pub fn bmp_output_path(input: &Path) -> PathBuf {
    input.with_extension("bmp")
}
