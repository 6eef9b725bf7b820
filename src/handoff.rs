//! Lock-free hand-off of captured frames from a sampling context, such as an
//! interrupt handler, to a processing context.
//!
//! [`FrameHandoff`] owns two frame slots. Each slot cycles through
//! [`SlotState::Empty`], [`SlotState::Filling`], [`SlotState::Ready`] and
//! [`SlotState::Claimed`]. The producer fills the slots in alternation and the
//! consumer claims them in the same order, so frames arrive first in, first out.
//!
//! A slot state is only ever changed by the side that currently owns the slot,
//! so plain atomic loads and stores suffice and no compare-and-swap is needed.
//! Marking a slot ready is a release store, matched by an acquire load in the
//! consumer before it reads the samples.
//!
//! When the slot the producer is about to fill is still held by the consumer,
//! incoming samples are dropped until it is released. Each such run of dropped
//! samples counts as one overrun.

use core::cell::UnsafeCell;
use core::ops::{Deref, DerefMut};
use core::slice;
use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use crate::config::MAX_RAW_FRAME_LEN;

const EMPTY: u8 = 0;
const FILLING: u8 = 1;
const READY: u8 = 2;
const CLAIMED: u8 = 3;

/// The number of frame slots.
pub const SLOT_COUNT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// Free for the producer.
    Empty,
    /// Being written by the producer.
    Filling,
    /// Complete and waiting for the consumer.
    Ready,
    /// Being read by the consumer.
    Claimed,
}

impl SlotState {
    fn from_raw(state: u8) -> Self {
        match state {
            EMPTY => SlotState::Empty,
            FILLING => SlotState::Filling,
            READY => SlotState::Ready,
            _ => SlotState::Claimed,
        }
    }
}

/// The result of pushing a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The sample was written to the frame being filled.
    Stored,
    /// The sample completed a frame, which is now ready for the consumer.
    FrameReady,
    /// No slot was free and the sample was discarded.
    Dropped,
}

struct Slot {
    state: AtomicU8,
    samples: UnsafeCell<[f32; MAX_RAW_FRAME_LEN]>,
}

impl Slot {
    const fn new() -> Self {
        Slot {
            state: AtomicU8::new(EMPTY),
            samples: UnsafeCell::new([0.0; MAX_RAW_FRAME_LEN]),
        }
    }

    fn state(&self) -> SlotState {
        SlotState::from_raw(self.state.load(Ordering::Acquire))
    }

    fn samples_ptr(&self) -> *mut f32 {
        self.samples.get() as *mut f32
    }
}

/// Storage for two frames shared by a [`FrameProducer`] and a [`FrameConsumer`].
///
/// The storage is sized for the largest supported frame and does not allocate.
/// It can be placed in a `static` since [`FrameHandoff::new`] is `const`.
pub struct FrameHandoff {
    slots: [Slot; SLOT_COUNT],
    overruns: AtomicU32,
}

// Samples in a slot are only accessed by the side owning the slot according
// to its state.
unsafe impl Sync for FrameHandoff {}

impl FrameHandoff {
    pub const fn new() -> Self {
        FrameHandoff {
            slots: [Slot::new(), Slot::new()],
            overruns: AtomicU32::new(0),
        }
    }

    /// Splits the hand-off into a producer and a consumer exchanging frames of
    /// `frame_len` samples. All slots are emptied and the overrun count is reset.
    pub fn split(&mut self, frame_len: usize) -> (FrameProducer<'_>, FrameConsumer<'_>) {
        if frame_len == 0 || frame_len > MAX_RAW_FRAME_LEN {
            panic!(
                "Frame length must be between 1 and {}, got {}",
                MAX_RAW_FRAME_LEN, frame_len
            )
        }
        for slot in self.slots.iter_mut() {
            *slot.state.get_mut() = EMPTY;
        }
        *self.overruns.get_mut() = 0;

        let handoff: &FrameHandoff = self;
        (
            FrameProducer {
                handoff,
                frame_len,
                slot: 0,
                position: 0,
                dropping: false,
            },
            FrameConsumer {
                handoff,
                frame_len,
                slot: 0,
                seen_overruns: 0,
            },
        )
    }

    pub fn slot_state(&self, index: usize) -> SlotState {
        self.slots[index].state()
    }

    /// The number of overruns since the last split.
    pub fn overruns(&self) -> u32 {
        self.overruns.load(Ordering::Relaxed)
    }
}

impl Default for FrameHandoff {
    fn default() -> Self {
        Self::new()
    }
}

/// The writing half of a [`FrameHandoff`]. [`FrameProducer::push`] does a
/// bounded amount of work and never blocks, so it can be called from an
/// interrupt handler.
pub struct FrameProducer<'a> {
    handoff: &'a FrameHandoff,
    frame_len: usize,
    slot: usize,
    position: usize,
    dropping: bool,
}

impl<'a> FrameProducer<'a> {
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Appends a sample to the frame being filled.
    pub fn push(&mut self, sample: f32) -> PushOutcome {
        let slot = &self.handoff.slots[self.slot];

        if self.position == 0 {
            if slot.state.load(Ordering::Acquire) != EMPTY {
                if !self.dropping {
                    self.dropping = true;
                    // The producer is the only writer of the counter.
                    let overruns = self.handoff.overruns.load(Ordering::Relaxed);
                    self.handoff
                        .overruns
                        .store(overruns.wrapping_add(1), Ordering::Relaxed);
                }
                return PushOutcome::Dropped;
            }
            self.dropping = false;
            slot.state.store(FILLING, Ordering::Relaxed);
        }

        // The slot is FILLING, so the consumer does not access it.
        unsafe {
            slot.samples_ptr().add(self.position).write(sample);
        }
        self.position += 1;

        if self.position == self.frame_len {
            slot.state.store(READY, Ordering::Release);
            self.position = 0;
            self.slot = (self.slot + 1) % SLOT_COUNT;
            PushOutcome::FrameReady
        } else {
            PushOutcome::Stored
        }
    }

    /// Returns true while samples are being dropped because no slot is free.
    pub fn is_dropping(&self) -> bool {
        self.dropping
    }
}

/// The reading half of a [`FrameHandoff`].
pub struct FrameConsumer<'a> {
    handoff: &'a FrameHandoff,
    frame_len: usize,
    slot: usize,
    seen_overruns: u32,
}

impl<'a> FrameConsumer<'a> {
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Claims the oldest ready frame, if any. The slot is released when the
    /// returned guard is dropped.
    pub fn pop(&mut self) -> Option<FrameGuard<'a>> {
        let handoff = self.handoff;
        let slot = &handoff.slots[self.slot];
        if slot.state.load(Ordering::Acquire) != READY {
            return None;
        }
        slot.state.store(CLAIMED, Ordering::Relaxed);
        self.slot = (self.slot + 1) % SLOT_COUNT;

        // The slot is CLAIMED, so the producer does not access it until the
        // guard releases it.
        let samples = unsafe { slice::from_raw_parts_mut(slot.samples_ptr(), self.frame_len) };
        Some(FrameGuard {
            state: &slot.state,
            samples,
        })
    }

    /// Claims the oldest ready frame, calling `wait` until one is available.
    /// `wait` would typically sleep until the next interrupt.
    pub fn pop_blocking<W>(&mut self, mut wait: W) -> FrameGuard<'a>
    where
        W: FnMut(),
    {
        loop {
            if let Some(frame) = self.pop() {
                return frame;
            }
            wait();
        }
    }

    pub fn slot_state(&self, index: usize) -> SlotState {
        self.handoff.slot_state(index)
    }

    /// The number of overruns since the hand-off was split.
    pub fn overruns(&self) -> u32 {
        self.handoff.overruns()
    }

    /// The number of overruns since the previous call.
    pub fn take_new_overruns(&mut self) -> u32 {
        let overruns = self.handoff.overruns();
        let new_overruns = overruns.wrapping_sub(self.seen_overruns);
        self.seen_overruns = overruns;
        new_overruns
    }
}

/// Exclusive access to a claimed frame. Dropping the guard hands the slot back
/// to the producer.
pub struct FrameGuard<'a> {
    state: &'a AtomicU8,
    samples: &'a mut [f32],
}

impl<'a> Deref for FrameGuard<'a> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        self.samples
    }
}

impl<'a> DerefMut for FrameGuard<'a> {
    fn deref_mut(&mut self) -> &mut [f32] {
        self.samples
    }
}

impl<'a> Drop for FrameGuard<'a> {
    fn drop(&mut self) {
        self.state.store(EMPTY, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(producer: &mut FrameProducer, samples: &[f32]) -> Vec<PushOutcome> {
        samples.iter().map(|sample| producer.push(*sample)).collect()
    }

    #[test]
    fn test_slot_states() {
        let mut handoff = FrameHandoff::new();
        let (mut producer, mut consumer) = handoff.split(4);
        assert_eq!(consumer.slot_state(0), SlotState::Empty);

        assert_eq!(
            push_all(&mut producer, &[1.0, 2.0, 3.0]),
            vec![PushOutcome::Stored; 3]
        );
        assert_eq!(consumer.slot_state(0), SlotState::Filling);
        assert!(consumer.pop().is_none());

        assert_eq!(producer.push(4.0), PushOutcome::FrameReady);
        assert_eq!(consumer.slot_state(0), SlotState::Ready);
        assert_eq!(consumer.slot_state(1), SlotState::Empty);

        let frame = consumer.pop().unwrap();
        assert_eq!(&*frame, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(consumer.slot_state(0), SlotState::Claimed);
        drop(frame);
        assert_eq!(consumer.slot_state(0), SlotState::Empty);
    }

    #[test]
    fn test_frames_arrive_in_order() {
        let mut handoff = FrameHandoff::new();
        let (mut producer, mut consumer) = handoff.split(3);
        let samples: Vec<f32> = (0..6).map(|i| i as f32).collect();
        let outcomes = push_all(&mut producer, &samples);
        assert_eq!(outcomes[2], PushOutcome::FrameReady);
        assert_eq!(outcomes[5], PushOutcome::FrameReady);

        let first = consumer.pop().unwrap();
        // The second slot can be claimed while the first is held.
        let second = consumer.pop().unwrap();
        assert_eq!(&*first, &[0.0, 1.0, 2.0]);
        assert_eq!(&*second, &[3.0, 4.0, 5.0]);
        assert!(consumer.pop().is_none());
    }

    #[test]
    fn test_claimed_frame_is_writable() {
        let mut handoff = FrameHandoff::new();
        let (mut producer, mut consumer) = handoff.split(2);
        push_all(&mut producer, &[1.0, 2.0]);
        let mut frame = consumer.pop().unwrap();
        frame[0] = 10.0;
        assert_eq!(&*frame, &[10.0, 2.0]);
    }

    #[test]
    fn test_overrun() {
        let mut handoff = FrameHandoff::new();
        let (mut producer, mut consumer) = handoff.split(2);
        push_all(&mut producer, &[0.0, 1.0, 2.0, 3.0]);

        // Both slots are ready, so the next samples are dropped.
        assert_eq!(
            push_all(&mut producer, &[4.0, 5.0, 6.0]),
            vec![PushOutcome::Dropped; 3]
        );
        assert!(producer.is_dropping());
        assert_eq!(consumer.overruns(), 1);
        assert_eq!(consumer.take_new_overruns(), 1);
        assert_eq!(consumer.take_new_overruns(), 0);

        let first = consumer.pop().unwrap();
        assert_eq!(&*first, &[0.0, 1.0]);
        drop(first);

        assert_eq!(
            push_all(&mut producer, &[7.0, 8.0]),
            vec![PushOutcome::Stored, PushOutcome::FrameReady]
        );
        assert!(!producer.is_dropping());
        assert_eq!(&*consumer.pop().unwrap(), &[2.0, 3.0]);
        assert_eq!(&*consumer.pop().unwrap(), &[7.0, 8.0]);

        // A held frame also blocks the producer.
        push_all(&mut producer, &[9.0, 10.0]);
        let held = consumer.pop().unwrap();
        push_all(&mut producer, &[11.0, 12.0]);
        assert_eq!(producer.push(13.0), PushOutcome::Dropped);
        assert_eq!(consumer.take_new_overruns(), 1);
        assert_eq!(consumer.overruns(), 2);
        drop(held);
        assert_eq!(producer.push(14.0), PushOutcome::Stored);
    }

    #[test]
    fn test_pop_blocking() {
        let mut handoff = FrameHandoff::new();
        let (mut producer, mut consumer) = handoff.split(2);
        producer.push(1.0);
        let mut pending = vec![2.0];
        let frame = consumer.pop_blocking(|| {
            if let Some(sample) = pending.pop() {
                producer.push(sample);
            }
        });
        assert_eq!(&*frame, &[1.0, 2.0]);
    }

    #[test]
    fn test_split_resets() {
        let mut handoff = FrameHandoff::new();
        {
            let (mut producer, _consumer) = handoff.split(1);
            push_all(&mut producer, &[1.0, 2.0, 3.0]);
        }
        assert_eq!(handoff.slot_state(0), SlotState::Ready);
        assert_eq!(handoff.overruns(), 1);

        let (_producer, mut consumer) = handoff.split(1);
        assert!(consumer.pop().is_none());
        assert_eq!(consumer.overruns(), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_frame_len() {
        let mut handoff = FrameHandoff::new();
        let _ = handoff.split(0);
    }

    #[test]
    #[should_panic]
    fn test_oversized_frame_len() {
        let mut handoff = FrameHandoff::new();
        let _ = handoff.split(MAX_RAW_FRAME_LEN + 1);
    }
}
