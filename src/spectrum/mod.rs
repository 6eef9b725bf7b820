//! Spectrum analysis: the band-pass, decimation and FFT front end producing
//! magnitude bins, the harmonic product spectrum and bin arithmetic.

mod bins;
mod front_end;
mod hps;

pub use bins::{
    bandwidth, bin_count, bin_index_to_freq, bin_width, frame_length_from_bin_width,
    freq_to_bin_index, max_bin_index,
};
pub use front_end::{decimate, SpectralFrontEnd};
pub use hps::{harmonic_product_spectrum, HARMONIC_COUNT};
