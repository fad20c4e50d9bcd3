/// Test doubles for the receive path: a tokio-backed timer and a reporter
/// that records everything the monitor hands over.
use korri_lcc::protocol::monitor::Reporter;
use korri_lcc::protocol::openlcb::DecodedFrame;
use korri_lcc::protocol::transport::{can_frame::CanFrame, traits::korri_timer::KorriTimer};
use tokio::time::{sleep, Duration};

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl KorriTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[derive(Default)]
#[allow(dead_code)]
/// Reporter keeping raw frames, classifications, and rendered text.
pub struct RecordingReporter {
    pub frames: Vec<CanFrame>,
    pub decoded: Vec<DecodedFrame>,
    pub lines: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, raw: &CanFrame, decoded: &DecodedFrame) {
        self.frames.push(*raw);
        self.decoded.push(*decoded);
        self.lines.push(format!("msg: {}\n{}", raw, decoded));
    }
}

#[allow(dead_code)]
/// Frame carrying a sequence number in its first four payload bytes.
pub fn numbered_frame(id: u32, seq: u32) -> CanFrame {
    CanFrame::new(id, &seq.to_be_bytes()).expect("valid test frame")
}

#[allow(dead_code)]
/// Read back the sequence number written by [`numbered_frame`].
pub fn sequence_of(frame: &CanFrame) -> u32 {
    u32::from_be_bytes([
        frame.payload[0],
        frame.payload[1],
        frame.payload[2],
        frame.payload[3],
    ])
}
