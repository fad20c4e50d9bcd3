//! # Monitor Example
//!
//! Minimal example demonstrating the korri-lcc receive path:
//! - Split a frame queue into producer and consumer halves
//! - Feed it from a simulated CAN driver running on another thread
//! - Classify and print every frame from a polling loop
//!
//! This example uses `std` for a quick trial run.
//!
//! ```bash
//! cargo run --example monitor
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use korri_lcc::protocol::monitor::Monitor;
use korri_lcc::protocol::openlcb::DecodedFrame;
use korri_lcc::protocol::transport::can_frame::CanFrame;
use korri_lcc::protocol::transport::can_id::CanId;
use korri_lcc::protocol::transport::frame_queue::FrameQueue;
use korri_lcc::protocol::transport::rx::{RxHandler, RxNotification};
use korri_lcc::protocol::transport::DEFAULT_QUEUE_CAPACITY;

/// Frames a node emits while joining the bus, plus some ordinary traffic.
fn simulated_traffic() -> Vec<CanFrame> {
    let alias = 0x3AE;
    let node_id = [0x02, 0x01, 0x57, 0x00, 0x01, 0x05];
    let mut frames = Vec::new();

    // Check ID frames 7..4 carry the node id, 12 bits at a time.
    for (seq, slice) in [(7u32, 0x020u32), (6, 0x157), (5, 0x000), (4, 0x105)] {
        let id = CanId::control((seq << 12) | slice)
            .source_alias(alias)
            .build()
            .expect("valid Check ID");
        frames.push(CanFrame::new(id.raw(), &[]).expect("valid frame"));
    }

    for (content, data) in [(0x0700, &[][..]), (0x0701, &node_id[..])] {
        let id = CanId::control(content)
            .source_alias(alias)
            .build()
            .expect("valid control id");
        frames.push(CanFrame::new(id.raw(), data).expect("valid frame"));
    }

    let init = CanId::openlcb(1)
        .gross_priority(0)
        .type_within_priority(0x08)
        .source_alias(alias)
        .build()
        .expect("valid MTI id");
    frames.push(CanFrame::new(init.raw(), &node_id).expect("valid frame"));

    let consumer_identified = CanId::openlcb(1)
        .gross_priority(1)
        .type_within_priority(0x06)
        .event_present(true)
        .message_modifier(3)
        .source_alias(alias)
        .build()
        .expect("valid MTI id");
    frames.push(
        CanFrame::new(consumer_identified.raw(), &[5, 1, 1, 1, 0x22, 0, 0, 1])
            .expect("valid frame"),
    );

    let datagram = CanId::openlcb(2).source_alias(alias).build().expect("valid id");
    frames.push(CanFrame::new(datagram.raw(), &[0x20, 0x43]).expect("valid frame"));

    frames
}

fn main() {
    println!("=== korri-lcc Monitor ===\n");

    let mut queue: FrameQueue<DEFAULT_QUEUE_CAPACITY> = FrameQueue::new();
    let (producer, consumer) = queue.split();
    let driver_done = AtomicBool::new(false);

    thread::scope(|scope| {
        // ======================================================================
        // 1. Simulated CAN driver: notification callback on every frame
        // ======================================================================
        scope.spawn(|| {
            let mut handler = RxHandler::new(producer);
            for frame in simulated_traffic() {
                handler.on_notify(RxNotification::Received(&frame));
                thread::sleep(Duration::from_millis(5));
            }
            driver_done.store(true, Ordering::Release);
        });

        // ======================================================================
        // 2. Polling loop: one frame per iteration
        // ======================================================================
        let mut monitor = Monitor::new(consumer, |raw: &CanFrame, decoded: &DecodedFrame| {
            println!("msg: {}", raw);
            println!("{}\n", decoded);
        });

        loop {
            let finished = driver_done.load(Ordering::Acquire);
            if monitor.poll_once().is_none() {
                if finished {
                    break;
                }
                thread::sleep(Duration::from_millis(1));
            }
        }

        println!(
            "Processed {} frame(s), {} dropped",
            monitor.processed(),
            monitor.dropped()
        );
    });
}
