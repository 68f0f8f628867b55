use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to allocate {what} buffer of {len} bytes")]
    AllocationFailure { what: &'static str, len: usize },

    #[error("Failed to open {}: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {written} of {total} bytes written")]
    WriteFailure {
        written: usize,
        total: usize,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Unsupported conversion type: {0}")]
    UnsupportedConversion(u32),

    #[error("Missing input file path")]
    MissingInputPath,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample plane has {got} bytes, expected {expected}")]
    InvalidPlane { expected: usize, got: usize },

    #[error("Short read from input: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },

    #[error("Raw frame truncated: byte {offset} needed, frame has {len} bytes")]
    TruncatedFrame { offset: usize, len: usize },

    #[error("Sample index {index} outside plane of {len} bytes")]
    SampleOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse classification of [`ConversionError`], one per status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AllocationFailure,
    OpenFailure,
    WriteFailure,
    ArgumentError,
    ShortRead,
    Other,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            Self::OpenFailure { .. } => ErrorKind::OpenFailure,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
            Self::UnsupportedConversion(_)
            | Self::MissingInputPath
            | Self::InvalidArgument(_)
            | Self::InvalidDimensions(..) => ErrorKind::ArgumentError,
            Self::ShortRead { .. } | Self::TruncatedFrame { .. } => ErrorKind::ShortRead,
            Self::InvalidPlane { .. } | Self::SampleOutOfBounds { .. } | Self::IoError(_) => {
                ErrorKind::Other
            }
        }
    }

    /// Process status code reported by the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedConversion(_) => 2,
            Self::MissingInputPath => 3,
            _ => match self.kind() {
                ErrorKind::AllocationFailure => 4,
                ErrorKind::OpenFailure => 5,
                ErrorKind::WriteFailure => 6,
                ErrorKind::ShortRead => 7,
                ErrorKind::ArgumentError | ErrorKind::Other => 1,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_errors_share_kind() {
        assert_eq!(ConversionError::UnsupportedConversion(7).kind(), ErrorKind::ArgumentError);
        assert_eq!(ConversionError::MissingInputPath.kind(), ErrorKind::ArgumentError);
        assert_eq!(ConversionError::InvalidDimensions(0, 4).kind(), ErrorKind::ArgumentError);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ConversionError::UnsupportedConversion(0).exit_code(), 2);
        assert_eq!(ConversionError::MissingInputPath.exit_code(), 3);
        assert_eq!(ConversionError::AllocationFailure { what: "rgb", len: 1 }.exit_code(), 4);
        assert_eq!(
            ConversionError::WriteFailure { written: 0, total: 10, source: None }.exit_code(),
            6
        );
        assert_eq!(ConversionError::ShortRead { expected: 5, got: 2 }.exit_code(), 7);
        assert_eq!(ConversionError::InvalidDimensions(0, 0).exit_code(), 1);
    }
}
