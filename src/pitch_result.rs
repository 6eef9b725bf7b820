use crate::note::Note;

/// The outcome of analyzing one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PitchResult {
    /// The frame's spectral peak was below the noise floor. No pitch was estimated.
    WeakSignal {
        /// The peak magnitude normalized to sample units.
        peak_level: f32,
    },
    /// A pitch was estimated but is outside the note table.
    OutOfRange { frequency: f32 },
    /// A pitch and the note nearest to it.
    Note {
        frequency: f32,
        note: &'static Note,
        /// Deviation from `note`, positive if sharp.
        cents: i32,
    },
}

impl PitchResult {
    /// Returns true if the frame had enough energy for a pitch estimate.
    pub fn is_tone(&self) -> bool {
        !matches!(self, PitchResult::WeakSignal { .. })
    }

    /// The estimated fundamental frequency in Hz, if any.
    pub fn frequency(&self) -> Option<f32> {
        match self {
            PitchResult::WeakSignal { .. } => None,
            PitchResult::OutOfRange { frequency } => Some(*frequency),
            PitchResult::Note { frequency, .. } => Some(*frequency),
        }
    }

    pub fn note(&self) -> Option<&'static Note> {
        match self {
            PitchResult::Note { note, .. } => Some(*note),
            _ => None,
        }
    }

    pub fn cents(&self) -> Option<i32> {
        match self {
            PitchResult::Note { cents, .. } => Some(*cents),
            _ => None,
        }
    }
}
