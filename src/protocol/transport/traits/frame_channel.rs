//! Non-blocking frame hand-off between the driver notification context and
//! the consumer loop.
//!
//! [`FrameSink`] is the try-send side, [`FrameSource`] the try-receive side.
//! Both are implemented by the lock-free [`FrameQueue`](crate::protocol::transport::frame_queue::FrameQueue)
//! halves and by `embassy_sync` channel endpoints, so firmware can pick the
//! hand-off that fits its executor.
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Receiver, Sender};

use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::frame_queue::{FrameConsumer, FrameProducer};

/// Producer side. Must never block: a full sink drops the frame.
pub trait FrameSink {
    /// Offer a frame. Returns `false` when it was dropped.
    fn offer(&mut self, frame: CanFrame) -> bool;
}

/// Consumer side. Must never block: an empty source returns `None`.
pub trait FrameSource {
    /// Take the oldest pending frame.
    fn poll_frame(&mut self) -> Option<CanFrame>;

    /// Frames dropped by the producer so far, when the source tracks it.
    fn dropped(&self) -> Option<u32> {
        None
    }
}

impl<const N: usize> FrameSink for FrameProducer<'_, N> {
    #[inline]
    fn offer(&mut self, frame: CanFrame) -> bool {
        self.push(frame)
    }
}

impl<const N: usize> FrameSource for FrameConsumer<'_, N> {
    #[inline]
    fn poll_frame(&mut self) -> Option<CanFrame> {
        self.pop()
    }

    fn dropped(&self) -> Option<u32> {
        Some(FrameConsumer::dropped(self))
    }
}

impl<M: RawMutex, const N: usize> FrameSink for Sender<'_, M, CanFrame, N> {
    fn offer(&mut self, frame: CanFrame) -> bool {
        self.try_send(frame).is_ok()
    }
}

impl<M: RawMutex, const N: usize> FrameSource for Receiver<'_, M, CanFrame, N> {
    fn poll_frame(&mut self) -> Option<CanFrame> {
        self.try_receive().ok()
    }
}
