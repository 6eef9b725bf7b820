use crate::common::F32ArrayExt;
use crate::config::TunerConfig;
use crate::error::ConfigError;
use crate::handoff::FrameConsumer;
use crate::note::{cents_difference, lowest_note, nearest_note};
use crate::pitch_result::PitchResult;
use crate::spectrum::{
    bin_index_to_freq, freq_to_bin_index, harmonic_product_spectrum, max_bin_index,
    SpectralFrontEnd,
};

/// The processing context of the tuner. Turns frames of captured samples into
/// [`PitchResult`]s:
/// * Computes the magnitude spectrum of the frame
/// * Gates frames whose spectral peak is below the noise floor
/// * Computes the harmonic product spectrum
/// * Maps the strongest bin to a frequency and the nearest note
pub struct Tuner {
    config: TunerConfig,
    front_end: SpectralFrontEnd,
    /// The bin of the lowest note, where the harmonic product scan starts.
    lowest_bin: usize,
    processed_frame_count: usize,
}

impl Tuner {
    /// Creates a tuner, refusing configurations the fixed buffers and
    /// filter coefficients cannot handle.
    pub fn from_config(config: TunerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let lowest_bin = freq_to_bin_index(lowest_note().frequency, config.bin_width());
        log::info!(
            "Tuner configured: {} samples at {} Hz, decimated by {} to {} samples at {} Hz, {} Hz per bin",
            config.raw_frame_len(),
            config.capture_rate,
            config.oversampling_factor,
            config.frame_length.len(),
            config.analysis_rate(),
            config.bin_width()
        );

        Ok(Tuner {
            config,
            front_end: SpectralFrontEnd::new(config.frame_length, config.oversampling_factor),
            lowest_bin,
            processed_frame_count: 0,
        })
    }

    /// Analyzes a frame of `raw_frame_len()` captured samples. The frame is used as
    /// scratch space.
    pub fn process_frame(&mut self, frame: &mut [f32]) -> PitchResult {
        let bin_width = self.config.bin_width();
        let frame_len = self.config.frame_length.len();
        self.processed_frame_count += 1;

        let magnitudes = self.front_end.process(frame);

        // A sine of amplitude A centered on a bin has a peak magnitude of A * N / 2.
        let peak_level = magnitudes.peak_level() * 2.0 / (frame_len as f32);
        if peak_level < self.config.noise_floor {
            log::trace!("Frame {}: weak signal, peak level {}", self.processed_frame_count, peak_level);
            return PitchResult::WeakSignal { peak_level };
        }

        harmonic_product_spectrum(magnitudes, self.lowest_bin, self.config.harmonic_floor);
        let bin_index = max_bin_index(magnitudes);
        let frequency = bin_index_to_freq(bin_index, bin_width);

        let result = match nearest_note(frequency) {
            Some(note) => PitchResult::Note {
                frequency,
                note,
                cents: cents_difference(note.frequency, frequency),
            },
            None => PitchResult::OutOfRange { frequency },
        };
        log::debug!(
            "Frame {}: bin {}, {} Hz, {:?}",
            self.processed_frame_count,
            bin_index,
            frequency,
            result.note().map(|note| note.name)
        );
        result
    }

    /// Waits for the next frame from `consumer`, calling `wait` while none is
    /// ready, analyzes it and passes the result to `handler`. The frame slot is
    /// released before `handler` is called.
    pub fn run_once<W, H>(&mut self, consumer: &mut FrameConsumer, wait: W, mut handler: H)
    where
        W: FnMut(),
        H: FnMut(&PitchResult),
    {
        let new_overruns = consumer.take_new_overruns();
        if new_overruns > 0 {
            log::warn!(
                "Capture overran {} time(s), {} in total",
                new_overruns,
                consumer.overruns()
            );
        }

        let result = {
            let mut frame = consumer.pop_blocking(wait);
            self.process_frame(&mut frame)
        };
        handler(&result);
    }

    /// Processes frames from `consumer` forever.
    pub fn run<W, H>(&mut self, mut consumer: FrameConsumer, mut wait: W, mut handler: H) -> !
    where
        W: FnMut(),
        H: FnMut(&PitchResult),
    {
        loop {
            self.run_once(&mut consumer, &mut wait, &mut handler);
        }
    }

    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// The spectrum of the most recent frame. After a gated frame this is the
    /// magnitude spectrum, otherwise the harmonic product spectrum.
    pub fn magnitudes(&self) -> &[f32] {
        self.front_end.magnitudes()
    }

    /// Returns the number of processed frames since the tuner was created.
    pub fn processed_frame_count(&self) -> usize {
        self.processed_frame_count
    }

    /// Clears the filter state, for example after capture was paused.
    pub fn reset(&mut self) {
        self.front_end.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Capture;
    use crate::config::FrameLength;
    use crate::handoff::{FrameHandoff, PushOutcome};

    /// Sums sines with the given (frequency, amplitude) pairs.
    fn generate_tone(sample_rate: f32, partials: &[(f32, f32)], sample_count: usize) -> Vec<f32> {
        (0..sample_count)
            .map(|i| {
                let t = (i as f64) / (sample_rate as f64);
                partials
                    .iter()
                    .map(|(frequency, amplitude)| {
                        (*amplitude as f64)
                            * (2.0 * std::f64::consts::PI * (*frequency as f64) * t).sin()
                    })
                    .sum::<f64>() as f32
            })
            .collect()
    }

    fn default_tuner() -> Tuner {
        Tuner::from_config(TunerConfig::default()).unwrap()
    }

    fn tone_frame(tuner: &Tuner, partials: &[(f32, f32)]) -> Vec<f32> {
        let config = tuner.config();
        generate_tone(config.capture_rate as f32, partials, config.raw_frame_len())
    }

    #[test]
    fn test_sine_a2() {
        let mut tuner = default_tuner();
        let mut frame = tone_frame(&tuner, &[(110.0, 8000.0)]);
        let result = tuner.process_frame(&mut frame);
        assert_eq!(result.note().map(|note| note.name), Some("A2"));
        assert!(result.cents().unwrap().abs() <= 5);
        assert_eq!(tuner.processed_frame_count(), 1);

        // Again with the filters warmed up.
        let mut frame = tone_frame(&tuner, &[(110.0, 8000.0)]);
        let result = tuner.process_frame(&mut frame);
        assert_eq!(result.note().map(|note| note.name), Some("A2"));
        assert_eq!(result.frequency(), Some(110.0));
    }

    #[test]
    fn test_sharp_and_flat_sines() {
        for (frequency, cents) in [(111.0, 16), (113.0, 47), (107.0, -48)].iter() {
            let mut tuner = default_tuner();
            let mut frame = tone_frame(&tuner, &[(*frequency, 8000.0)]);
            let result = tuner.process_frame(&mut frame);
            assert_eq!(result.note().map(|note| note.name), Some("A2"), "{} Hz", frequency);
            assert_eq!(result.cents(), Some(*cents), "{} Hz", frequency);
        }
    }

    #[test]
    fn test_silence() {
        let mut tuner = default_tuner();
        let mut frame = vec![0.0; tuner.config().raw_frame_len()];
        assert_eq!(
            tuner.process_frame(&mut frame),
            PitchResult::WeakSignal { peak_level: 0.0 }
        );
    }

    #[test]
    fn test_quiet_sine_is_gated() {
        let mut tuner = default_tuner();
        let mut frame = tone_frame(&tuner, &[(110.0, 20.0)]);
        let result = tuner.process_frame(&mut frame);
        assert!(!result.is_tone());
    }

    #[test]
    fn test_weak_fundamental() {
        // Low E string, with most of the energy in the harmonics.
        let fundamental = 82.41;
        let partials: Vec<(f32, f32)> = [600.0, 3000.0, 2500.0, 1500.0, 800.0]
            .iter()
            .enumerate()
            .map(|(i, amplitude)| ((i + 1) as f32 * fundamental, *amplitude))
            .collect();
        let mut tuner = default_tuner();
        let mut frame = tone_frame(&tuner, &partials);
        let result = tuner.process_frame(&mut frame);
        assert_eq!(result.note().map(|note| note.name), Some("E2"));
        assert_eq!(result.frequency(), Some(82.0));
        assert_eq!(result.cents(), Some(-9));
    }

    #[test]
    fn test_out_of_range() {
        let mut tuner = default_tuner();
        let mut frame = tone_frame(&tuner, &[(1100.0, 8000.0)]);
        let result = tuner.process_frame(&mut frame);
        assert_eq!(result, PitchResult::OutOfRange { frequency: 1100.0 });
    }

    #[test]
    fn test_full_scale_sine() {
        let mut tuner = default_tuner();
        let mut frame = tone_frame(&tuner, &[(440.0, 32767.0)]);
        let result = tuner.process_frame(&mut frame);
        assert_eq!(result.note().map(|note| note.name), Some("A4"));
        assert!(tuner.magnitudes().iter().all(|magnitude| magnitude.is_finite()));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TunerConfig {
            oversampling_factor: 3,
            ..TunerConfig::default()
        };
        assert_eq!(
            Tuner::from_config(config).err(),
            Some(ConfigError::UnsupportedOversamplingFactor(3))
        );
    }

    #[test]
    fn test_coarse_frame_length() {
        // 1024 analysis samples give 4 Hz bins.
        let config = TunerConfig {
            frame_length: FrameLength::Len1024,
            ..TunerConfig::default()
        };
        let mut tuner = Tuner::from_config(config).unwrap();
        let mut frame = tone_frame(&tuner, &[(440.0, 8000.0)]);
        assert_eq!(frame.len(), 4096);
        let result = tuner.process_frame(&mut frame);
        assert_eq!(result.note().map(|note| note.name), Some("A4"));
        assert_eq!(result.cents(), Some(0));
    }

    #[test]
    fn test_threaded_pipeline() {
        let config = TunerConfig::default();
        let mut tuner = Tuner::from_config(config).unwrap();
        let mut handoff = FrameHandoff::new();
        let (producer, mut consumer) = handoff.split(config.raw_frame_len());
        let (mut to_display, mut from_tuner) = rtrb::RingBuffer::<PitchResult>::new(4).split();
        let frame_count = 3;

        std::thread::scope(|scope| {
            // Plays the ADC interrupt, quantizing a 110 Hz sine to 12-bit codes.
            scope.spawn(move || {
                let mut capture = Capture::new(producer);
                let sample_rate = config.capture_rate as f64;
                let mut completed_frames = 0;
                let mut i: u64 = 0;
                while completed_frames < frame_count {
                    let t = (i as f64) / sample_rate;
                    let sample = 8000.0 * (2.0 * std::f64::consts::PI * 110.0 * t).sin();
                    let code = (sample * 2047.5 / 32768.0 + 2047.5).round() as u16;
                    if capture.on_sample_ready(code) == PushOutcome::FrameReady {
                        completed_frames += 1;
                    }
                    i += 1;
                }
            });

            let display = scope.spawn(move || {
                let mut notes = Vec::new();
                while notes.len() < frame_count {
                    match from_tuner.pop() {
                        Ok(result) => notes.push(result.note().map(|note| note.name)),
                        Err(_) => std::thread::yield_now(),
                    }
                }
                notes
            });

            for _ in 0..frame_count {
                tuner.run_once(&mut consumer, std::thread::yield_now, |result| {
                    to_display.push(*result).unwrap();
                });
            }

            assert_eq!(display.join().unwrap(), vec![Some("A2"); frame_count]);
        });
        assert_eq!(tuner.processed_frame_count(), frame_count);
    }
}
