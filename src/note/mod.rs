//! The note table and conversions from frequencies to notes and
//! [cents](https://en.wikipedia.org/wiki/Cent_(music)).

mod table;

use micromath::F32Ext;

use crate::common::round_half_up;

pub use table::{highest_note, lowest_note, note_frequency, Note, NOTES};

pub const CENTS_IN_OCTAVE: f32 = 1200.0;
pub const CENTS_IN_SEMITONE: i32 = 100;

/// Returns how far `frequency` is from `reference_frequency` in cents, without
/// rounding. Positive if `frequency` is higher (sharp), negative if it is lower (flat).
pub fn cents_offset(reference_frequency: f32, frequency: f32) -> f32 {
    // The approximate log2 is only accurate for arguments of at least 1.
    if frequency >= reference_frequency {
        CENTS_IN_OCTAVE * F32Ext::log2(frequency / reference_frequency)
    } else {
        -CENTS_IN_OCTAVE * F32Ext::log2(reference_frequency / frequency)
    }
}

/// Returns how far `frequency` is from `reference_frequency` in cents, rounded
/// half up. Positive if `frequency` is higher (sharp), negative if it is lower (flat).
pub fn cents_difference(reference_frequency: f32, frequency: f32) -> i32 {
    round_half_up(cents_offset(reference_frequency, frequency)) as i32
}

/// Returns the note nearest to `frequency`, or `None` if `frequency` is below the
/// lowest or above the highest tabulated note.
///
/// A frequency exactly half a semitone (50 cents) from two notes resolves to the
/// upper one.
pub fn nearest_note(frequency: f32) -> Option<&'static Note> {
    let upper_index = match NOTES.iter().position(|note| note.frequency > frequency) {
        Some(0) => return None,
        Some(index) => index,
        None => {
            let highest = highest_note();
            return if frequency == highest.frequency {
                Some(highest)
            } else {
                None
            };
        }
    };

    let lower = &NOTES[upper_index - 1];
    let upper = &NOTES[upper_index];
    if is_nearer_upper(lower.frequency, upper.frequency, frequency) {
        Some(upper)
    } else {
        Some(lower)
    }
}

/// Returns true if `frequency` is at least as close to `upper` as to `lower` in
/// cents. The point halfway between two frequencies in cents is their geometric
/// mean, so no logarithm is needed.
fn is_nearer_upper(lower: f32, upper: f32, frequency: f32) -> bool {
    // Products of two f32 values are exact in f64.
    let frequency = frequency as f64;
    frequency * frequency >= (lower as f64) * (upper as f64)
}
