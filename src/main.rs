use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use raw2bmp::image_pipeline::{ConversionError, ConversionRequest, EdgePolicy};
use raw2bmp::logger::{self, error, info};

/// Convert a packed raw Bayer capture into a 24-bit BMP.
#[derive(Parser, Debug)]
#[command(name = "raw2bmp", version, disable_help_flag = true)]
struct Args {
    /// Frame width in pixels
    #[arg(short = 'w', long)]
    width: usize,

    /// Frame height in pixels
    #[arg(short = 'h', long)]
    height: usize,

    /// Bits per packed sample; defaults to the conversion type's depth
    #[arg(short = 'b', long = "bits")]
    bits: Option<u32>,

    /// Raw input file
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Conversion type: 1 = 10-bit BGGR raw to 24-bit BMP
    #[arg(short = 's', long = "sq-type")]
    sq_type: u32,

    /// Output path; defaults to the input path with a .bmp extension
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Handling of reads past the last sample during debayering
    #[arg(long, value_enum, default_value_t = EdgeArg::Replicate)]
    edge: EdgeArg,

    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EdgeArg {
    Replicate,
    Error,
}

impl From<EdgeArg> for EdgePolicy {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Replicate => EdgePolicy::Replicate,
            EdgeArg::Error => EdgePolicy::Error,
        }
    }
}

fn run(args: Args) -> anyhow::Result<PathBuf> {
    let request = ConversionRequest {
        width: args.width,
        height: args.height,
        bit_depth: args.bits,
        selector: args.sq_type,
        input: args.file,
        output: args.output,
        edge_policy: args.edge.into(),
    };
    Ok(request.run()?)
}

fn main() -> ExitCode {
    logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(output) => {
            info!("Wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            let code = e
                .downcast_ref::<ConversionError>()
                .map_or(1, ConversionError::exit_code);
            ExitCode::from(code)
        }
    }
}
