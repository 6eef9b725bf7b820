use super::coefficients::{HIGH_PASS_A, HIGH_PASS_B, LOW_PASS_TAPS, LOW_PASS_TAP_COUNT};
use super::fir::FirFilter;
use super::iir::IirFilter;

/// Band-pass filter for oversampled input: a high-pass removing DC offset and
/// rumble below the lowest note, followed by an anti-aliasing low-pass that
/// leaves only content the decimated signal can represent.
///
/// Filter state carries over between calls to [`process`](BandPassFilter::process),
/// so consecutive frames are filtered as one continuous signal.
pub struct BandPassFilter {
    high_pass: IirFilter<3>,
    low_pass: FirFilter<LOW_PASS_TAP_COUNT>,
}

impl BandPassFilter {
    pub fn new() -> Self {
        BandPassFilter {
            high_pass: IirFilter::new(HIGH_PASS_A, HIGH_PASS_B),
            low_pass: FirFilter::new(LOW_PASS_TAPS),
        }
    }

    /// Filters a buffer in place.
    pub fn process(&mut self, buffer: &mut [f32]) {
        self.high_pass.process(buffer);
        self.low_pass.process(buffer);
    }

    /// Clears the filter state, e.g after a gap in the input.
    pub fn reset(&mut self) {
        self.high_pass.reset();
        self.low_pass.reset();
    }
}

impl Default for BandPassFilter {
    fn default() -> Self {
        BandPassFilter::new()
    }
}
