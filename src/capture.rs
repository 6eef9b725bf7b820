//! The sampling side of the pipeline: converts ADC codes and feeds them into a
//! [`FrameProducer`].

use crate::handoff::{FrameProducer, PushOutcome};
use crate::sample::convert_adc_code;

/// Per-sample capture callback state, to be driven by the ADC sample-ready
/// interrupt or a timer.
pub struct Capture<'a> {
    producer: FrameProducer<'a>,
}

impl<'a> Capture<'a> {
    pub fn new(producer: FrameProducer<'a>) -> Self {
        Capture { producer }
    }

    /// Handles one sample-ready event. Never blocks.
    pub fn on_sample_ready(&mut self, code: u16) -> PushOutcome {
        self.producer.push(convert_adc_code(code))
    }

    /// Handles a sequence of codes, for example a DMA block. Returns the number
    /// of frames completed.
    pub fn capture_from<I>(&mut self, codes: I) -> usize
    where
        I: IntoIterator<Item = u16>,
    {
        let mut completed_frames = 0;
        for code in codes {
            if self.on_sample_ready(code) == PushOutcome::FrameReady {
                completed_frames += 1;
            }
        }
        completed_frames
    }

    /// The number of samples per frame.
    pub fn frame_len(&self) -> usize {
        self.producer.frame_len()
    }
}
