//! Frame-sampling loop around the estimator.
//!
//! A sampler thread pulls hands from a [`LandmarkSource`] on a fixed cadence
//! and offers them to a single worker over a bounded channel with
//! `try_send`. A tick that finds the channel full is dropped, so with a
//! capacity-1 channel the frame already waiting is the one evaluated next
//! and later ticks are lost until the worker catches up. The worker drains
//! whatever is queued and evaluates the last frame it received. Results come
//! out strictly in frame order.

mod json_source;

pub use json_source::JsonLinesSource;

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::{
    error::EstimateError,
    matcher::GestureEstimator,
    types::{Estimation, GestureMatch, Point3},
};

/// Upstream producer of landmark sets, one entry per detected hand.
pub trait LandmarkSource: Send + 'static {
    /// `Ok(None)` signals the end of the stream. `Err` rejects one unreadable
    /// frame and the sampler asks again on the next tick, so a source whose
    /// input is gone must return `Ok(None)` rather than keep failing.
    fn next_hands(&mut self) -> anyhow::Result<Option<Vec<Vec<Point3>>>>;
}

#[derive(Clone, Debug)]
pub struct HandFrame {
    pub sequence: u64,
    pub hands: Vec<Vec<Point3>>,
    pub timestamp: Instant,
}

#[derive(Clone, Debug)]
pub struct FrameResult {
    pub sequence: u64,
    pub timestamp: Instant,
    /// One entry per hand, in input order.
    pub hands: Vec<Result<Estimation, EstimateError>>,
}

impl FrameResult {
    /// Most confident match over every well-formed hand.
    pub fn best(&self) -> Option<&GestureMatch> {
        self.hands
            .iter()
            .filter_map(|hand| hand.as_ref().ok().and_then(Estimation::best))
            .fold(None, |best: Option<&GestureMatch>, m| match best {
                Some(b) if b.score >= m.score => Some(b),
                _ => Some(m),
            })
    }
}

pub fn evaluate_frame(estimator: &GestureEstimator, frame: &HandFrame) -> FrameResult {
    let hands = frame
        .hands
        .iter()
        .enumerate()
        .map(|(idx, landmarks)| {
            let result = estimator.estimate(landmarks);
            if let Err(err) = &result {
                log::warn!("frame {} hand {idx} skipped: {err}", frame.sequence);
            }
            result
        })
        .collect();

    FrameResult {
        sequence: frame.sequence,
        timestamp: frame.timestamp,
        hands,
    }
}

fn run_worker_loop(
    estimator: Arc<GestureEstimator>,
    frame_rx: Receiver<HandFrame>,
    result_tx: Sender<FrameResult>,
) {
    while let Some(frame) = recv_latest_frame(&frame_rx) {
        let result = evaluate_frame(&estimator, &frame);
        if result_tx.send(result).is_err() {
            log::debug!("result receiver closed, stopping estimator worker");
            break;
        }
    }
}

fn recv_latest_frame(frame_rx: &Receiver<HandFrame>) -> Option<HandFrame> {
    let mut frame = frame_rx.recv().ok()?;
    while let Ok(newer) = frame_rx.try_recv() {
        log::debug!("dropping stale frame {}", frame.sequence);
        frame = newer;
    }
    Some(frame)
}

pub fn start_estimator(
    estimator: Arc<GestureEstimator>,
    frame_rx: Receiver<HandFrame>,
    result_tx: Sender<FrameResult>,
) -> thread::JoinHandle<()> {
    log::info!(
        "starting gesture estimator worker with {} templates",
        estimator.library().len()
    );
    thread::spawn(move || run_worker_loop(estimator, frame_rx, result_tx))
}

#[derive(Debug)]
pub struct Sampler {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Sampler {
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Blocks until the source is exhausted.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Sampler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Consecutive source errors after which the sampler gives up.
pub const MAX_CONSECUTIVE_SOURCE_ERRORS: u32 = 64;

/// Samples `source` every `interval`. Frames are offered with `try_send`, so
/// a tick that finds the channel full is dropped. The sampler stops when the
/// source ends, when the worker is gone, or after
/// [`MAX_CONSECUTIVE_SOURCE_ERRORS`] failed reads in a row.
pub fn start_sampler<S: LandmarkSource>(
    mut source: S,
    interval: Duration,
    frame_tx: Sender<HandFrame>,
) -> Sampler {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();

    let handle = thread::spawn(move || {
        let mut sequence = 0u64;
        let mut failures = 0u32;
        while !stop_flag.load(Ordering::Relaxed) {
            let tick = Instant::now();
            match source.next_hands() {
                Ok(Some(hands)) => {
                    failures = 0;
                    let frame = HandFrame {
                        sequence,
                        hands,
                        timestamp: tick,
                    };
                    match frame_tx.try_send(frame) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            log::debug!("estimator busy, dropping frame {sequence}");
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            log::debug!("estimator worker gone, stopping sampler");
                            break;
                        }
                    }
                    sequence += 1;
                }
                Ok(None) => {
                    log::info!("landmark source exhausted after {sequence} frames");
                    break;
                }
                Err(err) => {
                    failures += 1;
                    log::warn!("failed to read landmarks: {err:#}");
                    if failures >= MAX_CONSECUTIVE_SOURCE_ERRORS {
                        log::error!("landmark source failed {failures} times in a row, stopping");
                        break;
                    }
                }
            }

            if let Some(remaining) = interval.checked_sub(tick.elapsed()) {
                thread::sleep(remaining);
            }
        }
    });

    Sampler {
        stop,
        handle: Some(handle),
    }
}
