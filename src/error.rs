use thiserror::Error;

/// Reasons a [`TunerConfig`](crate::TunerConfig) is refused at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported frame length {0}, expected a power of two from 32 to 4096")]
    UnsupportedFrameLength(usize),
    #[error("unsupported oversampling factor {0}, expected 1, 2 or 4")]
    UnsupportedOversamplingFactor(usize),
    #[error("capture rate {actual} Hz does not match the {expected} Hz the filter coefficients were designed for")]
    CaptureRateMismatch { expected: u32, actual: u32 },
    #[error("analysis Nyquist frequency {nyquist} Hz is not above the highest note at {highest_note} Hz")]
    NyquistBelowRange { nyquist: f32, highest_note: f32 },
    #[error("bin width {bin_width} Hz is too coarse to resolve the lowest note at {lowest_note} Hz")]
    BinWidthTooCoarse { bin_width: f32, lowest_note: f32 },
    #[error("invalid threshold {0}")]
    InvalidThreshold(f32),
}
