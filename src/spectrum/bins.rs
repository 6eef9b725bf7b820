use crate::common::{round_half_up, F32ArrayExt};
use crate::config::FrameLength;

/// The number of magnitude bins for a frame length.
pub fn bin_count(frame_length: FrameLength) -> usize {
    frame_length.bin_count()
}

/// The width in Hz of the band covered by the bins, i.e the Nyquist frequency.
pub fn bandwidth(analysis_rate: f32) -> f32 {
    0.5 * analysis_rate
}

/// The width in Hz of a single bin.
pub fn bin_width(frame_length: FrameLength, analysis_rate: f32) -> f32 {
    bandwidth(analysis_rate) / (bin_count(frame_length) as f32)
}

/// Returns the frame length giving bins `width` Hz wide at `analysis_rate`, if any.
pub fn frame_length_from_bin_width(width: f32, analysis_rate: f32) -> Option<FrameLength> {
    FrameLength::ALL
        .iter()
        .copied()
        .find(|frame_length| bin_width(*frame_length, analysis_rate) == width)
}

/// The index of the bin centered nearest to `frequency`. Ties round up, so a
/// frequency exactly between two bins maps to the higher one.
pub fn freq_to_bin_index(frequency: f32, bin_width: f32) -> usize {
    // Negative values saturate to 0.
    round_half_up(frequency / bin_width) as usize
}

/// The center frequency of a bin.
pub fn bin_index_to_freq(bin_index: usize, bin_width: f32) -> f32 {
    (bin_index as f32) * bin_width
}

/// The index of the bin with the largest magnitude. Ties resolve to the lowest index.
pub fn max_bin_index(magnitudes: &[f32]) -> usize {
    magnitudes.max_index()
}
