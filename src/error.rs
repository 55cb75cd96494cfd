use eink_tone::ToneError;
use thiserror::Error;

/// Failures of a pipeline run.
#[derive(Debug, Error)]
pub enum PressError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported bit depth: {0} (expected 1 or 2)")]
    UnsupportedBitDepth(u8),

    #[error("Empty image")]
    EmptyImage,

    #[error("Parameter out of range: {name} = {value}")]
    ParameterOutOfRange { name: &'static str, value: f32 },

    #[error("Sample length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Tone error: {0}")]
    Tone(ToneError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl From<ToneError> for PressError {
    fn from(e: ToneError) -> Self {
        match e {
            ToneError::InvalidDimensions { width, height } => PressError::InvalidDimensions {
                width: saturate_u32(width),
                height: saturate_u32(height),
            },
            ToneError::UnsupportedBitDepth(bits) => PressError::UnsupportedBitDepth(bits),
            ToneError::LengthMismatch { expected, actual } => {
                PressError::LengthMismatch { expected, actual }
            }
            other => PressError::Tone(other),
        }
    }
}

fn saturate_u32(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Failures writing or reading the indexed container.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Empty image")]
    EmptyImage,

    #[error("Unsupported bit depth: {0}")]
    UnsupportedDepth(u8),

    #[error("Invalid index buffer: {0}")]
    InvalidIndices(String),

    #[error("Dimensions exceed container limits: {width}x{height}")]
    DimensionOverflow { width: usize, height: usize },

    #[error("Truncated container at offset {offset}")]
    Truncated { offset: usize },

    #[error("Bad signature")]
    BadSignature,

    #[error("CRC mismatch in {chunk} chunk: expected {expected:08x}, got {actual:08x}")]
    CrcMismatch {
        chunk: String,
        expected: u32,
        actual: u32,
    },

    #[error("PNG encode error: {0}")]
    Png(String),

    #[error("PNG decode error: {0}")]
    Decode(String),
}

/// Failures fitting a source image into the panel frame.
#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("Empty source image")]
    EmptySource,

    #[error("Empty target frame")]
    EmptyTarget,

    #[error("{strategy} would alter {amount:.2} of the frame (limit {limit:.2})")]
    ThresholdExceeded {
        strategy: &'static str,
        amount: f32,
        limit: f32,
    },
}

/// Failures loading a pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_error_invalid_dimensions() {
        let error = PressError::InvalidDimensions {
            width: 0,
            height: 300,
        };
        assert_eq!(error.to_string(), "Invalid dimensions: 0x300");
    }

    #[test]
    fn test_press_error_unsupported_bit_depth() {
        let error = PressError::UnsupportedBitDepth(4);
        assert_eq!(error.to_string(), "Unsupported bit depth: 4 (expected 1 or 2)");
    }

    #[test]
    fn test_press_error_parameter_out_of_range() {
        let error = PressError::ParameterOutOfRange {
            name: "gamma",
            value: -1.0,
        };
        assert_eq!(error.to_string(), "Parameter out of range: gamma = -1");
    }

    #[test]
    fn test_press_error_from_tone_error() {
        let error: PressError = ToneError::UnsupportedBitDepth(3).into();
        assert!(matches!(error, PressError::UnsupportedBitDepth(3)));

        let error: PressError = ToneError::InvalidDimensions {
            width: 0,
            height: 5,
        }
        .into();
        assert!(matches!(
            error,
            PressError::InvalidDimensions {
                width: 0,
                height: 5
            }
        ));

        let error: PressError = ToneError::LengthMismatch {
            expected: 16,
            actual: 12,
        }
        .into();
        assert!(matches!(
            error,
            PressError::LengthMismatch {
                expected: 16,
                actual: 12
            }
        ));
    }

    #[test]
    fn test_press_error_from_encode_error() {
        let error: PressError = EncodeError::EmptyImage.into();
        match error {
            PressError::Encode(EncodeError::EmptyImage) => {}
            other => panic!("Expected Encode variant, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_error_crc_mismatch() {
        let error = EncodeError::CrcMismatch {
            chunk: "IDAT".to_string(),
            expected: 0xdeadbeef,
            actual: 0x1234,
        };
        assert_eq!(
            error.to_string(),
            "CRC mismatch in IDAT chunk: expected deadbeef, got 00001234"
        );
    }

    #[test]
    fn test_fit_error_threshold_exceeded() {
        let error = FitError::ThresholdExceeded {
            strategy: "crop",
            amount: 0.6,
            limit: 0.5,
        };
        assert_eq!(
            error.to_string(),
            "crop would alter 0.60 of the frame (limit 0.50)"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ConfigError = io.into();
        assert_eq!(error.to_string(), "IO error: missing");
    }
}
