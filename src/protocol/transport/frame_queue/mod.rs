//! Interrupt-safe single-producer / single-consumer queue of received frames.
//!
//! The producer half lives in the CAN driver's notification context and may
//! preempt the consumer at any instruction boundary. The consumer half is
//! drained from a polling loop. No locks are taken: each side owns one
//! position counter and only reads the other one.
//!
//! # Ordering
//!
//! * producer: write slot, then `Release`-store the push position;
//! * consumer: `Acquire`-load the push position, copy the slot, then
//!   `Release`-store the pull position so the producer never reuses a slot
//!   that is still being read.
//!
//! Only atomic loads and stores are used, so the queue also works on cores
//! without compare-and-swap (Cortex-M0+, RP2040).
//!
//! # Capacity
//!
//! `N` must be a power of two (checked at compile time). One slot is kept
//! free to tell full from empty with two counters, so at most `N - 1`
//! frames are held at once. A push on a full queue drops the frame and
//! bumps the drop counter.
use core::cell::UnsafeCell;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::protocol::transport::can_frame::CanFrame;

//==================================================================================FRAME_QUEUE
/// Fixed-capacity circular buffer shared by one [`FrameProducer`] and one
/// [`FrameConsumer`]. Obtain both with [`FrameQueue::split`].
///
/// ```
/// use korri_lcc::protocol::transport::{can_frame::CanFrame, frame_queue::FrameQueue};
///
/// let mut queue: FrameQueue<4> = FrameQueue::new();
/// let (mut producer, mut consumer) = queue.split();
///
/// let frame = CanFrame::new(0x1910_0123, &[1, 2, 3, 4, 5, 6]).unwrap();
/// assert!(producer.push(frame));
/// assert_eq!(consumer.pop(), Some(frame));
/// assert_eq!(consumer.pop(), None);
/// ```
pub struct FrameQueue<const N: usize> {
    push_position: AtomicU32,
    pull_position: AtomicU32,
    dropped: AtomicU32,
    slots: [UnsafeCell<CanFrame>; N],
}

// Slots are only reached through the producer/consumer handles, which are
// unique per queue because `split` takes `&mut self`.
unsafe impl<const N: usize> Sync for FrameQueue<N> {}

impl<const N: usize> Default for FrameQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameQueue<N> {
    const MASK: u32 = (N as u32).wrapping_sub(1);

    /// Create an empty queue. Usable in `static` / `StaticCell` initialisers.
    pub const fn new() -> Self {
        const {
            assert!(
                N >= 2 && N.is_power_of_two() && N <= (1usize << 31),
                "FrameQueue capacity must be a power of two between 2 and 2^31"
            )
        };
        Self {
            push_position: AtomicU32::new(0),
            pull_position: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
            slots: [const { UnsafeCell::new(CanFrame::EMPTY) }; N],
        }
    }

    /// Number of slots (one of which is always kept free).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Split into the producer and consumer halves. The mutable borrow
    /// guarantees a single producer and a single consumer.
    pub fn split(&mut self) -> (FrameProducer<'_, N>, FrameConsumer<'_, N>) {
        let queue = &*self;
        (FrameProducer { queue }, FrameConsumer { queue })
    }

    /// Current `(push, pull)` counters.
    pub fn positions(&self) -> (u32, u32) {
        (
            self.push_position.load(Ordering::Acquire),
            self.pull_position.load(Ordering::Acquire),
        )
    }

    /// Number of frames currently held.
    pub fn len(&self) -> usize {
        let (push, pull) = self.positions();
        push.wrapping_sub(pull) as usize
    }

    /// `true` when no frame is waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total frames dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn push(&self, frame: CanFrame) -> bool {
        // Only the producer stores `push_position`.
        let push = self.push_position.load(Ordering::Relaxed);
        let pull = self.pull_position.load(Ordering::Acquire);

        if push.wrapping_add(1) & Self::MASK == pull & Self::MASK {
            let dropped = self.dropped.load(Ordering::Relaxed);
            self.dropped.store(dropped.wrapping_add(1), Ordering::Relaxed);
            return false;
        }

        // SAFETY: the slot at `push` is outside [pull, push), so the consumer
        // does not read it until the release store below publishes it.
        unsafe {
            *self.slots[(push & Self::MASK) as usize].get() = frame;
        }
        self.push_position
            .store(push.wrapping_add(1), Ordering::Release);
        true
    }

    fn pop(&self) -> Option<CanFrame> {
        // Only the consumer stores `pull_position`.
        let pull = self.pull_position.load(Ordering::Relaxed);
        let push = self.push_position.load(Ordering::Acquire);

        if push == pull {
            return None;
        }

        // SAFETY: the acquire load above makes the producer's write visible,
        // and the producer does not touch this slot until `pull` moves past it.
        let frame = unsafe { *self.slots[(pull & Self::MASK) as usize].get() };
        self.pull_position
            .store(pull.wrapping_add(1), Ordering::Release);
        Some(frame)
    }
}

impl<const N: usize> fmt::Debug for FrameQueue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (push, pull) = self.positions();
        f.debug_struct("FrameQueue")
            .field("capacity", &N)
            .field("push_position", &push)
            .field("pull_position", &pull)
            .field("dropped", &self.dropped())
            .finish()
    }
}

//==================================================================================PRODUCER
/// Producer half, owned by the driver notification context.
/// Never blocks; a full queue drops the frame.
#[derive(Debug)]
pub struct FrameProducer<'a, const N: usize> {
    queue: &'a FrameQueue<N>,
}

impl<const N: usize> FrameProducer<'_, N> {
    /// Queue a frame. Returns `false` when the queue was full and the frame
    /// was dropped.
    #[inline]
    pub fn push(&mut self, frame: CanFrame) -> bool {
        self.queue.push(frame)
    }

    /// Total frames dropped so far.
    pub fn dropped(&self) -> u32 {
        self.queue.dropped()
    }

    /// Number of frames currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// `true` when no frame is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

//==================================================================================CONSUMER
/// Consumer half, owned by the polling loop.
#[derive(Debug)]
pub struct FrameConsumer<'a, const N: usize> {
    queue: &'a FrameQueue<N>,
}

impl<const N: usize> FrameConsumer<'_, N> {
    /// Take the oldest frame, or `None` when the queue is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<CanFrame> {
        self.queue.pop()
    }

    /// Total frames dropped by the producer so far.
    pub fn dropped(&self) -> u32 {
        self.queue.dropped()
    }

    /// Number of frames currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// `true` when no frame is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
