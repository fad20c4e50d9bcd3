//! Consumer side of the receive path: drain at most one frame per
//! iteration, classify it, and hand the result to a [`Reporter`].
//!
//! The monitor owns a [`FrameSource`] (usually the
//! [`FrameConsumer`](crate::protocol::transport::frame_queue::FrameConsumer)
//! half of the receive queue) and never blocks on it. When the source is
//! empty, [`Monitor::run`] idles through a [`KorriTimer`].
use core::convert::Infallible;
use core::future::Future;

use futures_util::future::{select, Either};
use futures_util::pin_mut;

use crate::protocol::openlcb::{classify, DecodedFrame};
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::frame_channel::FrameSource;
use crate::protocol::transport::traits::korri_timer::KorriTimer;

//==================================================================================REPORTER
/// Receives every classified frame. Rendering is up to the implementation;
/// [`DecodedFrame`] implements `Display` for a human-readable report.
pub trait Reporter {
    fn report(&mut self, raw: &CanFrame, decoded: &DecodedFrame);
}

impl<F> Reporter for F
where
    F: FnMut(&CanFrame, &DecodedFrame),
{
    fn report(&mut self, raw: &CanFrame, decoded: &DecodedFrame) {
        self(raw, decoded)
    }
}

/// Reporter logging each frame through `defmt`.
#[cfg(feature = "defmt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DefmtReporter;

#[cfg(feature = "defmt")]
impl Reporter for DefmtReporter {
    fn report(&mut self, raw: &CanFrame, decoded: &DecodedFrame) {
        defmt::info!("msg: {} -> {}", raw, decoded);
    }
}

//==================================================================================MONITOR
/// Polling consumer loop.
#[derive(Debug)]
pub struct Monitor<S: FrameSource, R: Reporter> {
    source: S,
    reporter: R,
    processed: u32,
    last_dropped: u32,
}

impl<S: FrameSource, R: Reporter> Monitor<S, R> {
    pub fn new(source: S, reporter: R) -> Self {
        Self {
            source,
            reporter,
            processed: 0,
            last_dropped: 0,
        }
    }

    /// Process at most one frame. Returns its classification, or `None`
    /// when the source was empty.
    pub fn poll_once(&mut self) -> Option<DecodedFrame> {
        self.track_drops();

        let frame = self.source.poll_frame()?;
        let decoded = classify(&frame);

        #[cfg(feature = "defmt")]
        defmt::trace!("classified frame {:x}", frame.id.raw());

        self.reporter.report(&frame, &decoded);
        self.processed = self.processed.wrapping_add(1);
        Some(decoded)
    }

    /// Process every frame currently available; returns how many.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.poll_once().is_some() {
            count += 1;
        }
        count
    }

    /// Poll forever, waiting `idle_ms` through `timer` whenever the source
    /// is empty.
    pub async fn run<T: KorriTimer>(&mut self, timer: &mut T, idle_ms: u32) -> Infallible {
        loop {
            if self.poll_once().is_none() {
                timer.delay_ms(idle_ms).await;
            }
        }
    }

    /// Like [`run`](Self::run), but returns once `stop` completes. The
    /// frame being processed when `stop` fires is always fully reported.
    pub async fn run_until<T, F>(&mut self, timer: &mut T, idle_ms: u32, stop: F) -> u32
    where
        T: KorriTimer,
        F: Future<Output = ()>,
    {
        {
            let run = self.run(timer, idle_ms);
            pin_mut!(run);
            pin_mut!(stop);

            match select(stop, run).await {
                Either::Left(((), _)) => {}
                Either::Right((never, _)) => match never {},
            }
        }
        self.processed
    }

    /// Frames processed so far.
    pub fn processed(&self) -> u32 {
        self.processed
    }

    /// Last drop count observed on the source.
    pub fn dropped(&self) -> u32 {
        self.last_dropped
    }

    /// Borrow the reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Give back the source and the reporter.
    pub fn into_parts(self) -> (S, R) {
        (self.source, self.reporter)
    }

    fn track_drops(&mut self) {
        let Some(dropped) = self.source.dropped() else {
            return;
        };
        if dropped != self.last_dropped {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "receive queue dropped {} frame(s)",
                dropped.wrapping_sub(self.last_dropped)
            );
            self.last_dropped = dropped;
        }
    }
}
