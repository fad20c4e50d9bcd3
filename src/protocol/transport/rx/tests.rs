//! Driver notification handling: queueing, filtering, and drops.
use super::*;
use crate::protocol::transport::frame_queue::FrameQueue;

#[test]
/// Received frames reach the queue; other reasons are ignored.
fn test_received_frames_are_queued() {
    let mut queue: FrameQueue<4> = FrameQueue::new();
    let (producer, mut consumer) = queue.split();
    let mut handler = RxHandler::new(producer);

    let frame = CanFrame::new(0x1910_0123, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(
        handler.on_notify(RxNotification::Received(&frame)),
        RxOutcome::Queued
    );
    assert_eq!(
        handler.on_notify(RxNotification::Transmitted),
        RxOutcome::Ignored
    );
    assert_eq!(
        handler.on_notify(RxNotification::Error(3)),
        RxOutcome::Ignored
    );

    assert_eq!(consumer.pop(), Some(frame));
    assert_eq!(consumer.pop(), None);
}

#[test]
/// Identifiers outside the acceptance range never enter the queue.
fn test_filter() {
    let mut queue: FrameQueue<4> = FrameQueue::new();
    let (producer, mut consumer) = queue.split();
    let mut handler = RxHandler::with_filter(producer, AcceptanceFilter::range(0x101, 0x201));

    let low = CanFrame::new(0x100, &[]).unwrap();
    let inside = CanFrame::new(0x101, &[]).unwrap();
    let high = CanFrame::new(0x202, &[]).unwrap();

    assert_eq!(handler.on_notify(RxNotification::Received(&low)), RxOutcome::Filtered);
    assert_eq!(handler.on_notify(RxNotification::Received(&inside)), RxOutcome::Queued);
    assert_eq!(handler.on_notify(RxNotification::Received(&high)), RxOutcome::Filtered);

    assert_eq!(consumer.pop(), Some(inside));
    assert_eq!(consumer.pop(), None);
}

#[test]
/// A full queue reports the drop instead of blocking.
fn test_full_queue_drops() {
    let mut queue: FrameQueue<2> = FrameQueue::new();
    let (producer, _consumer) = queue.split();
    let mut handler = RxHandler::new(producer);
    let frame = CanFrame::new(0x0070_0123, &[]).unwrap();

    assert_eq!(handler.on_notify(RxNotification::Received(&frame)), RxOutcome::Queued);
    assert_eq!(handler.on_notify(RxNotification::Received(&frame)), RxOutcome::Dropped);
    assert_eq!(handler.sink().dropped(), 1);
}
