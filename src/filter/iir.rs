/// A fixed order [infinite impulse response](https://en.wikipedia.org/wiki/Infinite_impulse_response)
/// filter in direct form I. `N` is the number of feedforward and feedback
/// coefficients, i.e the filter order plus one.
pub struct IirFilter<const N: usize> {
    a_coeffs: [f32; N],
    b_coeffs: [f32; N],
    /// Most recent inputs, newest first.
    inputs: [f32; N],
    /// Most recent outputs, newest first.
    outputs: [f32; N],
}

impl<const N: usize> IirFilter<N> {
    /// `a_coeffs[0]` must be 1.
    pub fn new(a_coeffs: [f32; N], b_coeffs: [f32; N]) -> Self {
        if N == 0 {
            panic!("IIR filter must have at least one coefficient")
        }
        if a_coeffs[0] != 1.0 {
            panic!("IIR filter coefficients must be normalized so that a0 is 1")
        }
        IirFilter {
            a_coeffs,
            b_coeffs,
            inputs: [0.0; N],
            outputs: [0.0; N],
        }
    }

    pub fn process_sample(&mut self, input: f32) -> f32 {
        self.inputs.rotate_right(1);
        self.inputs[0] = input;

        let mut output = 0.0;
        for (b, x) in self.b_coeffs.iter().zip(self.inputs.iter()) {
            output += b * x;
        }
        // outputs[i - 1] holds y[n - i]
        for (a, y) in self.a_coeffs.iter().skip(1).zip(self.outputs.iter()) {
            output -= a * y;
        }

        self.outputs.rotate_right(1);
        self.outputs[0] = output;
        output
    }

    /// Filters a buffer in place.
    pub fn process(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.inputs = [0.0; N];
        self.outputs = [0.0; N];
    }
}
