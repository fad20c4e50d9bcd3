//! Frame queue tests: FIFO order, capacity, overflow, and underflow.
use super::*;
use crate::protocol::transport::can_id::CanId;

fn frame(n: u32) -> CanFrame {
    CanFrame::from_parts(CanId(0x1910_0000 | n), 1, [n as u8, 0, 0, 0, 0, 0, 0, 0])
}

#[test]
/// Popping a fresh queue returns nothing and leaves the counters at zero.
fn test_underflow() {
    let mut queue: FrameQueue<8> = FrameQueue::new();
    {
        let (_producer, mut consumer) = queue.split();
        assert_eq!(consumer.pop(), None);
        assert_eq!(consumer.pop(), None);
        assert!(consumer.is_empty());
    }
    assert_eq!(queue.positions(), (0, 0));
    assert_eq!(queue.dropped(), 0);
}

#[test]
/// Frames come out in the order they went in.
fn test_fifo_order() {
    let mut queue: FrameQueue<8> = FrameQueue::new();
    let (mut producer, mut consumer) = queue.split();

    for n in 0..5 {
        assert!(producer.push(frame(n)));
    }
    assert_eq!(consumer.len(), 5);
    for n in 0..5 {
        assert_eq!(consumer.pop(), Some(frame(n)));
    }
    assert_eq!(consumer.pop(), None);
}

#[test]
/// Pushing `capacity` frames then one more keeps `capacity - 1` frames and
/// the dropped frames are never observed.
fn test_overflow_drops_newest() {
    let mut queue: FrameQueue<4> = FrameQueue::new();
    let (mut producer, mut consumer) = queue.split();

    assert!(producer.push(frame(0)));
    assert!(producer.push(frame(1)));
    assert!(producer.push(frame(2)));
    assert!(!producer.push(frame(3)));
    assert!(!producer.push(frame(4)));

    assert_eq!(producer.len(), 3);
    assert_eq!(producer.dropped(), 2);
    assert_eq!(consumer.dropped(), 2);

    assert_eq!(consumer.pop(), Some(frame(0)));
    assert_eq!(consumer.pop(), Some(frame(1)));
    assert_eq!(consumer.pop(), Some(frame(2)));
    assert_eq!(consumer.pop(), None);
}

#[test]
/// Occupancy never exceeds `capacity - 1` across many wraparounds.
fn test_capacity_invariant_with_wraparound() {
    let mut queue: FrameQueue<8> = FrameQueue::new();
    let (mut producer, mut consumer) = queue.split();

    let mut next_in = 0u32;
    let mut next_out = 0u32;
    for round in 0..100u32 {
        // Uneven push/pop bursts so the positions drift through every slot.
        for _ in 0..(round % 11) {
            if producer.push(frame(next_in)) {
                next_in += 1;
            }
            assert!(producer.len() <= 7);
        }
        for _ in 0..(round % 5) {
            if let Some(popped) = consumer.pop() {
                assert_eq!(popped, frame(next_out));
                next_out += 1;
            }
        }
    }
    assert!(next_in > 8 * 4, "positions must wrap several times");
}

#[test]
/// Counters keep working across the `u32` wrap.
fn test_counter_wrap() {
    let mut queue: FrameQueue<4> = FrameQueue::new();
    queue.push_position.store(u32::MAX - 1, Ordering::Relaxed);
    queue.pull_position.store(u32::MAX - 1, Ordering::Relaxed);
    let (mut producer, mut consumer) = queue.split();

    for n in 0..3 {
        assert!(producer.push(frame(n)));
    }
    assert!(!producer.push(frame(3)));
    for n in 0..3 {
        assert_eq!(consumer.pop(), Some(frame(n)));
    }
    assert_eq!(consumer.pop(), None);
    assert_eq!(queue.positions(), (1, 1));
}

#[test]
/// Capacity is reported as the number of slots.
fn test_capacity() {
    let queue: FrameQueue<128> = FrameQueue::default();
    assert_eq!(queue.capacity(), 128);
    assert!(queue.is_empty());
}
