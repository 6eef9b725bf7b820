//! A `no_std`, allocation free pitch detection core for instrument tuners running
//! on microcontrollers.
//!
//! Frames of oversampled ADC samples are processed as follows:
//! * Band-pass filtering, removing DC and rumble and preventing aliasing
//! * Decimation to the analysis rate
//! * Real FFT and magnitude spectrum
//! * Gating of frames without enough energy
//! * Harmonic product spectrum, reinforcing the fundamental of tones with strong harmonics
//! * Mapping of the strongest bin to a frequency, the nearest note and its deviation in
//! [cents](https://en.wikipedia.org/wiki/Cent_(music))
//!
//! Samples are moved from the capture context, typically an ADC interrupt handler,
//! to the processing context through a lock-free [`FrameHandoff`] with two frame slots.
//! All buffers are sized for the largest supported frame and live inside the
//! types owning them.
//!
//! # Examples
//!
//! Analyzing a single frame.
//! ```
//! use micro_tuner::{Tuner, TunerConfig};
//! # fn main() -> Result<(), micro_tuner::ConfigError> {
//! let config = TunerConfig::default();
//! let mut tuner = Tuner::from_config(config)?;
//!
//! let mut frame: Vec<f32> = (0..config.raw_frame_len())
//!     .map(|i| {
//!         let t = i as f32 / config.capture_rate as f32;
//!         8000.0 * (2.0 * std::f32::consts::PI * 110.0 * t).sin()
//!     })
//!     .collect();
//! let result = tuner.process_frame(&mut frame);
//! assert_eq!(result.note().map(|note| note.name), Some("A2"));
//! # Ok(())
//! # }
//! ```
//! Capture and processing contexts connected through a hand-off.
//! ```
//! use micro_tuner::{Capture, FrameHandoff, Tuner, TunerConfig};
//! # fn main() -> Result<(), micro_tuner::ConfigError> {
//! let config = TunerConfig::default();
//! let mut tuner = Tuner::from_config(config)?;
//! let mut handoff = FrameHandoff::new();
//! let (producer, mut consumer) = handoff.split(config.raw_frame_len());
//! let mut capture = Capture::new(producer);
//!
//! // Called from the ADC interrupt handler, one code at a time.
//! for _ in 0..config.raw_frame_len() {
//!     capture.on_sample_ready(2048);
//! }
//!
//! // The main loop. `wait` would normally sleep until the next interrupt.
//! tuner.run_once(&mut consumer, || {}, |result| {
//!     // A constant input carries no tone.
//!     assert!(!result.is_tone());
//! });
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod capture;
pub mod common;
pub mod config;
pub mod error;
pub mod filter;
pub mod handoff;
pub mod note;
pub mod pitch_result;
pub mod sample;
pub mod spectrum;
pub mod tuner;

pub use capture::Capture;
pub use config::{FrameLength, TunerConfig};
pub use error::ConfigError;
pub use handoff::{FrameConsumer, FrameGuard, FrameHandoff, FrameProducer, PushOutcome, SlotState};
pub use note::{nearest_note, Note};
pub use pitch_result::PitchResult;
pub use tuner::Tuner;
