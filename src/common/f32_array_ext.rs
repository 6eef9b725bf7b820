//! `[f32]` extensions.

use micromath::F32Ext;

/// `[f32]` extensions.
pub trait F32ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f32;
    /// Returns the index of the largest value. Ties resolve to the first occurrence.
    /// Returns 0 for an empty slice.
    fn max_index(&self) -> usize;
}

impl F32ArrayExt for [f32] {
    fn peak_level(&self) -> f32 {
        let mut max: f32 = 0.0;
        for sample in self.iter() {
            let value = F32Ext::abs(*sample);
            if value > max {
                max = value
            }
        }
        max
    }

    fn max_index(&self) -> usize {
        let mut max_index = 0;
        for (index, value) in self.iter().enumerate() {
            // Strict comparison keeps the first of several equal maxima.
            if *value > self[max_index] {
                max_index = index
            }
        }
        max_index
    }
}
