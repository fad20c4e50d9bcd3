//! Abstraction traits used by the receive path (frame hand-off and timer).
pub mod frame_channel;
pub mod korri_timer;
