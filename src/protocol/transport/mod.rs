//! OpenLCB CAN transport layer: frame representation, 29-bit identifier
//! fields, the interrupt-safe receive queue, and the driver boundary.
//!
//! ## Receive path constants
//!
//! Compile-time defaults for sizing and pacing the receive path.

pub mod can_frame;
pub mod can_id;
pub mod frame_queue;
pub mod rx;
pub mod traits;

/// Default number of slots in the receive [`FrameQueue`](frame_queue::FrameQueue).
///
/// One slot is reserved to tell full from empty, so up to 127 frames can be
/// buffered. At 125 kbit/s a full extended frame takes roughly 1 ms on the
/// wire, which leaves the consumer loop over 100 ms of slack before frames
/// are dropped.
pub const DEFAULT_QUEUE_CAPACITY: usize = 128;

/// Default delay between two polls of an empty frame source (ms).
///
/// Used by [`Monitor::run`](crate::protocol::monitor::Monitor::run). Short
/// enough that the queue cannot fill up while the loop idles.
pub const DEFAULT_IDLE_POLL_MS: u32 = 1;
