/// A note name and its frequency in Hz in twelve-tone equal temperament,
/// with A4 at 440 Hz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub name: &'static str,
    pub frequency: f32,
}

const fn note(name: &'static str, frequency: f32) -> Note {
    Note { name, frequency }
}

/// Notes from A1 to C6, ordered by strictly increasing frequency, one semitone
/// apart. Frequencies are rounded to 3 decimal places.
pub static NOTES: [Note; 52] = [
    note("A1", 55.0),
    note("A#1", 58.27),
    note("B1", 61.735),
    note("C2", 65.406),
    note("C#2", 69.296),
    note("D2", 73.416),
    note("D#2", 77.782),
    note("E2", 82.407),
    note("F2", 87.307),
    note("F#2", 92.499),
    note("G2", 97.999),
    note("G#2", 103.826),
    note("A2", 110.0),
    note("A#2", 116.541),
    note("B2", 123.471),
    note("C3", 130.813),
    note("C#3", 138.591),
    note("D3", 146.832),
    note("D#3", 155.563),
    note("E3", 164.814),
    note("F3", 174.614),
    note("F#3", 184.997),
    note("G3", 195.998),
    note("G#3", 207.652),
    note("A3", 220.0),
    note("A#3", 233.082),
    note("B3", 246.942),
    note("C4", 261.626),
    note("C#4", 277.183),
    note("D4", 293.665),
    note("D#4", 311.127),
    note("E4", 329.628),
    note("F4", 349.228),
    note("F#4", 369.994),
    note("G4", 391.995),
    note("G#4", 415.305),
    note("A4", 440.0),
    note("A#4", 466.164),
    note("B4", 493.883),
    note("C5", 523.251),
    note("C#5", 554.365),
    note("D5", 587.33),
    note("D#5", 622.254),
    note("E5", 659.255),
    note("F5", 698.456),
    note("F#5", 739.989),
    note("G5", 783.991),
    note("G#5", 830.609),
    note("A5", 880.0),
    note("A#5", 932.328),
    note("B5", 987.767),
    note("C6", 1046.502),
];

/// The lowest tabulated note, A1.
pub fn lowest_note() -> &'static Note {
    &NOTES[0]
}

/// The highest tabulated note, C6.
pub fn highest_note() -> &'static Note {
    &NOTES[NOTES.len() - 1]
}

/// Looks up the frequency of a note by name, ignoring case, e.g `"a#2"`.
pub fn note_frequency(name: &str) -> Option<f32> {
    NOTES
        .iter()
        .find(|note| note.name.eq_ignore_ascii_case(name))
        .map(|note| note.frequency)
}
