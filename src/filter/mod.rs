//! Fixed-coefficient filtering of oversampled input, ahead of decimation.

mod band_pass;
mod coefficients;
mod fir;
mod iir;

pub use band_pass::BandPassFilter;
pub use coefficients::DESIGN_CAPTURE_RATE;
pub use fir::FirFilter;
pub use iir::IirFilter;
