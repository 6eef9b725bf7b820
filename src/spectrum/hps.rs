use crate::common::F32ArrayExt;

/// The number of harmonics multiplied per candidate, including the fundamental.
/// A product of four magnitudes of a full scale frame stays well within `f32` range.
pub const HARMONIC_COUNT: usize = 4;

/// Computes the harmonic product spectrum in place.
///
/// Each candidate bin `i` from `lowest_bin` up is replaced by the product of
/// the magnitudes at `i, 2i, ..., HARMONIC_COUNT * i`. The scan stops when the
/// second harmonic of a candidate falls outside the spectrum. Harmonics past the
/// end of the spectrum are left out of the product, so candidates in the upper
/// part of the scan get partial products.
///
/// Bins with a magnitude below `floor_ratio` times the spectrum peak are treated
/// as absent. An absent candidate is set to zero and an absent harmonic is left
/// out of the product. Without this, a pure tone with no energy at its harmonics
/// loses to a subharmonic candidate. A `floor_ratio` of 0 gives the plain product.
///
/// Bins below `lowest_bin` are set to zero. Bins from the end of the scan up keep
/// their magnitudes.
pub fn harmonic_product_spectrum(magnitudes: &mut [f32], lowest_bin: usize, floor_ratio: f32) {
    let bin_count = magnitudes.len();
    let floor = floor_ratio * magnitudes.peak_level();
    let first_candidate = lowest_bin.max(1);

    for magnitude in magnitudes.iter_mut().take(first_candidate).skip(1) {
        *magnitude = 0.0;
    }

    // Candidates are overwritten in increasing order and all harmonics of a
    // candidate lie above it, so products only ever read original magnitudes.
    let mut i = first_candidate;
    while 2 * i < bin_count {
        let candidate = magnitudes[i];
        if candidate < floor {
            magnitudes[i] = 0.0;
            i += 1;
            continue;
        }

        let mut product = candidate;
        for k in 2..=HARMONIC_COUNT {
            let harmonic_index = k * i;
            if harmonic_index >= bin_count {
                break;
            }
            let harmonic = magnitudes[harmonic_index];
            if harmonic >= floor {
                product *= harmonic;
            }
        }
        magnitudes[i] = product;
        i += 1;
    }
}
