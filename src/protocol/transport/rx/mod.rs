//! Boundary with the CAN driver's receive notification.
//!
//! The driver calls back from interrupt context with a reason code and, for
//! received frames, the frame itself. [`RxHandler::on_notify`] only filters
//! and offers the frame to its sink: no logging, no decoding, no blocking.
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::frame_channel::FrameSink;

/// Reason codes reported by the CAN driver callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxNotification<'a> {
    /// A frame was received from the bus.
    Received(&'a CanFrame),
    /// A queued transmission completed.
    Transmitted,
    /// The driver detected a bus error; the value is driver specific.
    Error(u32),
}

/// What the handler did with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxOutcome {
    /// Frame handed to the sink.
    Queued,
    /// Sink was full; the frame is lost.
    Dropped,
    /// Frame rejected by the acceptance filter.
    Filtered,
    /// Notification does not carry a frame.
    Ignored,
}

//==================================================================================ACCEPTANCE_FILTER
/// Inclusive range of raw identifiers accepted by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcceptanceFilter {
    pub min_id: u32,
    pub max_id: u32,
}

impl AcceptanceFilter {
    /// Accepts every identifier.
    pub const ALL: AcceptanceFilter = AcceptanceFilter {
        min_id: 0,
        max_id: u32::MAX,
    };

    /// Accept identifiers in `min_id..=max_id`.
    pub const fn range(min_id: u32, max_id: u32) -> Self {
        Self { min_id, max_id }
    }

    #[inline]
    pub const fn accepts(&self, frame: &CanFrame) -> bool {
        let id = frame.id.raw();
        id >= self.min_id && id <= self.max_id
    }
}

impl Default for AcceptanceFilter {
    fn default() -> Self {
        Self::ALL
    }
}

//==================================================================================RX_HANDLER
/// Driver callback target owning the producer side of the hand-off.
#[derive(Debug)]
pub struct RxHandler<S: FrameSink> {
    sink: S,
    filter: AcceptanceFilter,
}

impl<S: FrameSink> RxHandler<S> {
    /// Handler accepting every frame.
    pub fn new(sink: S) -> Self {
        Self::with_filter(sink, AcceptanceFilter::ALL)
    }

    /// Handler accepting only identifiers inside `filter`.
    pub fn with_filter(sink: S, filter: AcceptanceFilter) -> Self {
        Self { sink, filter }
    }

    /// Active acceptance filter.
    pub fn filter(&self) -> AcceptanceFilter {
        self.filter
    }

    /// Borrow the sink (e.g. to read its drop counter).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Entry point for the driver callback. Returns immediately.
    #[inline]
    pub fn on_notify(&mut self, notification: RxNotification<'_>) -> RxOutcome {
        match notification {
            RxNotification::Received(frame) => {
                if !self.filter.accepts(frame) {
                    RxOutcome::Filtered
                } else if self.sink.offer(*frame) {
                    RxOutcome::Queued
                } else {
                    RxOutcome::Dropped
                }
            }
            RxNotification::Transmitted | RxNotification::Error(_) => RxOutcome::Ignored,
        }
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
