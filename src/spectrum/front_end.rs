use micromath::F32Ext;

use crate::common::real_fft_in_place;
use crate::config::{FrameLength, MAX_BIN_COUNT, MAX_OVERSAMPLING_FACTOR};
use crate::filter::BandPassFilter;

/// Turns a frame of oversampled, zero-centered samples into a magnitude spectrum:
/// * Band-pass filters the oversampled input
/// * Decimates by the oversampling factor
/// * Performs a real FFT
/// * Computes the magnitude of each bin, with the DC bin zeroed
///
/// The magnitude, and not the squared magnitude, is computed. Products of four
/// squared magnitudes overflow `f32` for loud input.
pub struct SpectralFrontEnd {
    frame_length: FrameLength,
    oversampling_factor: usize,
    filter: BandPassFilter,
    magnitudes: [f32; MAX_BIN_COUNT],
}

impl SpectralFrontEnd {
    pub fn new(frame_length: FrameLength, oversampling_factor: usize) -> Self {
        if oversampling_factor == 0 || oversampling_factor > MAX_OVERSAMPLING_FACTOR {
            panic!(
                "Oversampling factor must be between 1 and {}",
                MAX_OVERSAMPLING_FACTOR
            )
        }
        SpectralFrontEnd {
            frame_length,
            oversampling_factor,
            filter: BandPassFilter::new(),
            magnitudes: [0.0; MAX_BIN_COUNT],
        }
    }

    /// The number of samples `process` expects.
    pub fn raw_frame_len(&self) -> usize {
        self.frame_length.len() * self.oversampling_factor
    }

    pub fn bin_count(&self) -> usize {
        self.frame_length.bin_count()
    }

    /// Computes the magnitude spectrum of a frame of `raw_frame_len()` samples.
    ///
    /// The frame is used as scratch space and holds no meaningful data afterwards.
    pub fn process(&mut self, frame: &mut [f32]) -> &mut [f32] {
        if frame.len() != self.raw_frame_len() {
            panic!(
                "Got frame of length {}, expected {}",
                frame.len(),
                self.raw_frame_len()
            )
        }

        self.filter.process(frame);
        let decimated = decimate(frame, self.oversampling_factor);
        let fft = real_fft_in_place(decimated);

        let magnitudes = &mut self.magnitudes[..fft.len()];
        for (magnitude, z) in magnitudes.iter_mut().zip(fft.iter()) {
            *magnitude = F32Ext::sqrt(z.norm_sqr());
        }
        // The first bin packs the real valued DC and Nyquist coefficients
        // and is not a spectral peak.
        magnitudes[0] = 0.0;

        magnitudes
    }

    /// The most recently computed magnitude spectrum.
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes[..self.bin_count()]
    }

    /// Clears the filter state.
    pub fn reset(&mut self) {
        self.filter.reset();
    }
}

/// Keeps every `factor`th sample, compacting them at the start of the buffer.
/// Returns the decimated part of the buffer. The input must already be low-pass filtered.
pub fn decimate(buffer: &mut [f32], factor: usize) -> &mut [f32] {
    let decimated_len = buffer.len() / factor;
    for i in 1..decimated_len {
        buffer[i] = buffer[i * factor];
    }
    &mut buffer[..decimated_len]
}
