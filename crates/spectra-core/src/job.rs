// ─────────────────────────────────────────────────────────────────────
// Spectra — Background Job
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Run the pipeline off the caller's thread.
//!
//! A naive transform of a few hundred pixels per side takes seconds, so
//! interactive callers spawn a [`SpectrumJob`], poll [`SpectrumJob::progress`]
//! and [`SpectrumJob::try_result`] from their event loop, and may
//! [`SpectrumJob::cancel`] at any time. Cancellation is cooperative: the
//! worker checks the flag before every row or column.

use crate::pipeline::{SpectrumOutput, SpectrumPipeline};
use ndarray::Array2;
use spectra_math::{Pass, TransformHook};
use spectra_types::error::{SpectraError, SpectraResult};
use spectra_types::grid::ensure_non_empty;
use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// State shared between the handle and the worker thread.
#[derive(Debug)]
struct JobState {
    cancelled: AtomicBool,
    lines_done: AtomicUsize,
    /// Rows plus columns: one line per pass.
    total_lines: usize,
}

impl TransformHook for JobState {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn line_done(&self, _pass: Pass, _total: usize) {
        self.lines_done.fetch_add(1, Ordering::Relaxed);
    }
}

/// Handle to a pipeline run on a dedicated worker thread.
///
/// Dropping the handle before the result arrives cancels the run.
pub struct SpectrumJob {
    state: Arc<JobState>,
    receiver: Receiver<SpectraResult<SpectrumOutput>>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl SpectrumJob {
    pub fn spawn(pipeline: SpectrumPipeline, grid: Array2<f64>) -> SpectraResult<Self> {
        ensure_non_empty(&grid, "job input")?;
        let (height, width) = grid.dim();
        let job = Self::spawn_with(height + width, move |state| {
            pipeline.run_with_hook(&grid, state)
        })?;
        info!(width, height, "spectrum job spawned");
        Ok(job)
    }

    /// Run `work` on the worker thread against fresh shared state.
    fn spawn_with<F>(total_lines: usize, work: F) -> SpectraResult<Self>
    where
        F: FnOnce(&JobState) -> SpectraResult<SpectrumOutput> + Send + 'static,
    {
        let state = Arc::new(JobState {
            cancelled: AtomicBool::new(false),
            lines_done: AtomicUsize::new(0),
            total_lines,
        });

        let (tx, rx) = mpsc::channel();
        let worker_state = Arc::clone(&state);
        let handle = thread::Builder::new()
            .name("spectra-worker".to_string())
            .spawn(move || {
                let result = work(worker_state.as_ref());
                if let Err(err) = &result {
                    debug!("spectrum job ended with error: {err}");
                }
                // The handle may already be gone; nobody is waiting then.
                let _ = tx.send(result);
            })?;

        Ok(SpectrumJob {
            state,
            receiver: rx,
            handle: Some(handle),
            delivered: false,
        })
    }

    /// Ask the worker to stop at the next line boundary.
    pub fn cancel(&self) {
        if !self.state.cancelled.swap(true, Ordering::Relaxed) {
            info!("spectrum job cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::Relaxed)
    }

    /// Fraction of transform lines completed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let done = self.state.lines_done.load(Ordering::Relaxed);
        (done as f64 / self.state.total_lines as f64).min(1.0)
    }

    /// Non-blocking poll. Returns the result once, then `None`.
    pub fn try_result(&mut self) -> Option<SpectraResult<SpectrumOutput>> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => Some(self.finish(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let err = self.worker_failure();
                Some(self.finish(Err(err)))
            }
        }
    }

    /// Block until the worker delivers its result.
    pub fn wait(mut self) -> SpectraResult<SpectrumOutput> {
        if self.delivered {
            return Err(SpectraError::Worker(
                "result was already taken by try_result".to_string(),
            ));
        }
        match self.receiver.recv() {
            Ok(result) => self.finish(result),
            Err(_) => {
                let err = self.worker_failure();
                self.finish(Err(err))
            }
        }
    }

    fn finish(
        &mut self,
        result: SpectraResult<SpectrumOutput>,
    ) -> SpectraResult<SpectrumOutput> {
        self.delivered = true;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        result
    }

    fn worker_failure(&mut self) -> SpectraError {
        match self.handle.take().map(JoinHandle::join) {
            Some(Err(payload)) => {
                let msg = panic_message(payload.as_ref());
                warn!("spectrum worker panicked: {msg}");
                SpectraError::Worker(format!("worker panicked: {msg}"))
            }
            _ => SpectraError::Worker("worker exited without a result".to_string()),
        }
    }
}

impl Drop for SpectrumJob {
    fn drop(&mut self) {
        if !self.delivered {
            self.state.cancelled.store(true, Ordering::Relaxed);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
