use micromath::F32Ext;

/// Rounds to the nearest integer, resolving ties toward positive infinity,
/// i.e `0.5 -> 1`, `-0.5 -> 0`, `2.5 -> 3`.
///
/// All frequency to bin and cents conversions go through this function so that
/// boundary values always land on the same side.
pub fn round_half_up(value: f32) -> f32 {
    F32Ext::floor(value + 0.5)
}
