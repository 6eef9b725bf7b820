//! Init-time configuration of the pitch detection pipeline.
//!
//! All buffers in the crate are sized for [`MAX_FRAME_LEN`] and
//! [`MAX_OVERSAMPLING_FACTOR`], so a configuration only selects how much of
//! them is used. A configuration is validated once, before the pipeline starts,
//! and cannot be changed while running.

use core::convert::TryFrom;

use crate::error::ConfigError;
use crate::filter::DESIGN_CAPTURE_RATE;
use crate::note::{highest_note, lowest_note};
use crate::spectrum::{bin_width, freq_to_bin_index};

/// The largest supported number of analysis samples in a frame.
pub const MAX_FRAME_LEN: usize = 4096;
/// The largest supported number of magnitude bins.
pub const MAX_BIN_COUNT: usize = MAX_FRAME_LEN / 2;
/// The largest supported ratio between the capture rate and the analysis rate.
pub const MAX_OVERSAMPLING_FACTOR: usize = 4;
/// The largest supported number of captured samples in a frame, before decimation.
pub const MAX_RAW_FRAME_LEN: usize = MAX_FRAME_LEN * MAX_OVERSAMPLING_FACTOR;

/// The number of analysis samples in a frame. Determines the frequency resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub enum FrameLength {
    Len32 = 32,
    Len64 = 64,
    Len128 = 128,
    Len256 = 256,
    Len512 = 512,
    Len1024 = 1024,
    Len2048 = 2048,
    Len4096 = 4096,
}

impl FrameLength {
    /// All supported frame lengths, shortest first.
    pub const ALL: [FrameLength; 8] = [
        FrameLength::Len32,
        FrameLength::Len64,
        FrameLength::Len128,
        FrameLength::Len256,
        FrameLength::Len512,
        FrameLength::Len1024,
        FrameLength::Len2048,
        FrameLength::Len4096,
    ];

    /// The number of analysis samples.
    pub const fn len(self) -> usize {
        self as usize
    }

    /// The number of magnitude bins, i.e half the number of samples.
    pub const fn bin_count(self) -> usize {
        self.len() / 2
    }
}

impl TryFrom<usize> for FrameLength {
    type Error = ConfigError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        FrameLength::ALL
            .iter()
            .copied()
            .find(|frame_length| frame_length.len() == len)
            .ok_or(ConfigError::UnsupportedFrameLength(len))
    }
}

impl From<FrameLength> for usize {
    fn from(frame_length: FrameLength) -> usize {
        frame_length.len()
    }
}

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TunerConfig {
    /// The number of samples per frame after decimation.
    pub frame_length: FrameLength,
    /// The ratio between the capture rate and the analysis rate.
    pub oversampling_factor: usize,
    /// The rate in Hz at which raw samples are captured.
    pub capture_rate: u32,
    /// Frames whose strongest spectral component corresponds to a sine amplitude
    /// below this level, in signed 16 bit units, are reported as a weak signal.
    /// Chosen empirically.
    pub noise_floor: f32,
    /// Bins below this fraction of the spectrum peak are treated as absent by the
    /// harmonic product spectrum.
    pub harmonic_floor: f32,
}

impl Default for TunerConfig {
    /// 4096 analysis samples at 4096 Hz, i.e a bin width of 1 Hz, captured at 4x oversampling.
    fn default() -> Self {
        TunerConfig {
            frame_length: FrameLength::Len4096,
            oversampling_factor: 4,
            capture_rate: DESIGN_CAPTURE_RATE,
            noise_floor: 100.0,
            harmonic_floor: 0.02,
        }
    }
}

impl TunerConfig {
    /// The sample rate in Hz after decimation.
    pub fn analysis_rate(&self) -> f32 {
        self.capture_rate as f32 / self.oversampling_factor as f32
    }

    /// The number of captured samples per frame, before decimation.
    pub fn raw_frame_len(&self) -> usize {
        self.frame_length.len() * self.oversampling_factor
    }

    /// The width in Hz of a magnitude bin.
    pub fn bin_width(&self) -> f32 {
        bin_width(self.frame_length, self.analysis_rate())
    }

    /// Checks that the configuration can run on the fixed buffers and filter
    /// coefficients of this crate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.oversampling_factor;
        if factor == 0 || factor > MAX_OVERSAMPLING_FACTOR || !factor.is_power_of_two() {
            return Err(ConfigError::UnsupportedOversamplingFactor(factor));
        }
        if self.capture_rate != DESIGN_CAPTURE_RATE {
            return Err(ConfigError::CaptureRateMismatch {
                expected: DESIGN_CAPTURE_RATE,
                actual: self.capture_rate,
            });
        }

        let nyquist = 0.5 * self.analysis_rate();
        let highest_note = highest_note().frequency;
        if highest_note >= nyquist {
            return Err(ConfigError::NyquistBelowRange {
                nyquist,
                highest_note,
            });
        }

        let bin_width = self.bin_width();
        let lowest_note = lowest_note().frequency;
        if freq_to_bin_index(lowest_note, bin_width) == 0 {
            return Err(ConfigError::BinWidthTooCoarse {
                bin_width,
                lowest_note,
            });
        }

        if !self.noise_floor.is_finite() || self.noise_floor < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.noise_floor));
        }
        if !self.harmonic_floor.is_finite()
            || self.harmonic_floor < 0.0
            || self.harmonic_floor >= 1.0
        {
            return Err(ConfigError::InvalidThreshold(self.harmonic_floor));
        }

        Ok(())
    }
}
