//! Common algorithms and utilities.

mod f32_array_ext;
mod fft;
mod rounding;

pub use f32_array_ext::F32ArrayExt;
pub use fft::real_fft_in_place;
pub use rounding::round_half_up;
