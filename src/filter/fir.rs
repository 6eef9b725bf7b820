/// A [finite impulse response](https://en.wikipedia.org/wiki/Finite_impulse_response)
/// filter with `TAPS` coefficients and a circular delay line.
pub struct FirFilter<const TAPS: usize> {
    taps: [f32; TAPS],
    delay_line: [f32; TAPS],
    /// Index of the newest sample in the delay line.
    write_index: usize,
}

impl<const TAPS: usize> FirFilter<TAPS> {
    pub fn new(taps: [f32; TAPS]) -> Self {
        if TAPS == 0 {
            panic!("FIR filter must have at least one tap")
        }
        FirFilter {
            taps,
            delay_line: [0.0; TAPS],
            write_index: TAPS - 1,
        }
    }

    pub fn process_sample(&mut self, input: f32) -> f32 {
        self.write_index = if self.write_index == TAPS - 1 {
            0
        } else {
            self.write_index + 1
        };
        self.delay_line[self.write_index] = input;

        // Walk the delay line backwards in time, wrapping around its start.
        let (head, tail) = self.delay_line.split_at(self.write_index + 1);
        let mut output = 0.0;
        for (tap, x) in self
            .taps
            .iter()
            .zip(head.iter().rev().chain(tail.iter().rev()))
        {
            output += tap * x;
        }
        output
    }

    /// Filters a buffer in place.
    pub fn process(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.delay_line = [0.0; TAPS];
        self.write_index = TAPS - 1;
    }
}
