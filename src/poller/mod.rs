//! Recurring fetch loop.
//!
//! A tick is issued immediately on [`Poller::start`] and then on every
//! interval, whether or not the previous request has settled. Results are
//! delivered in completion order, so a slow response can land after a newer
//! one (last completion wins). [`Poller::stop`] bumps the session epoch;
//! completions from an older epoch are dropped without reaching the callback.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

/// Default polling interval
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;

/// Task spawning and repeating timers for the poll loop
pub trait Scheduler {
    /// Handle to a repeating timer. Dropping it cancels the timer.
    type Interval;

    /// Run a task on the current thread
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Call `tick` every `period_ms` milliseconds until the handle is dropped
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Interval;
}

/// Scheduler backed by the browser event loop
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Interval = gloo_timers::callback::Interval;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Interval {
        gloo_timers::callback::Interval::new(period_ms, tick)
    }
}

#[derive(Default)]
struct Session {
    epoch: Cell<u64>,
    issued: Cell<u64>,
    latest_completed: Cell<u64>,
}

/// Repeating fetch driven by a [`Scheduler`]
pub struct Poller<S: Scheduler> {
    scheduler: S,
    session: Rc<Session>,
    interval: Option<S::Interval>,
}

impl<S: Scheduler> Poller<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            session: Rc::new(Session::default()),
            interval: None,
        }
    }

    /// Cancel the schedule. Requests already in flight still complete but
    /// their results are discarded.
    pub fn stop(&mut self) {
        self.session.epoch.set(self.session.epoch.get() + 1);
        if self.interval.take().is_some() {
            log::debug!(
                "Poller stopped after {} tick(s)",
                self.session.issued.get()
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Number of ticks issued since the poller was created
    pub fn ticks_issued(&self) -> u64 {
        self.session.issued.get()
    }
}

impl<S: Scheduler + Clone + 'static> Poller<S> {
    /// Fetch now and then every `interval_ms`, passing each outcome to `on_result`.
    ///
    /// Calling `start` on a running poller restarts it; results of the
    /// previous run are discarded.
    pub fn start<F, Fut, T, E, R>(&mut self, interval_ms: u32, fetch: F, on_result: R)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        T: 'static,
        E: fmt::Display + 'static,
        R: Fn(Result<T, E>) + 'static,
    {
        self.stop();

        let epoch = self.session.epoch.get();
        let scheduler = self.scheduler.clone();
        let session = Rc::clone(&self.session);
        let on_result = Rc::new(on_result);

        let issue = move || {
            let seq = session.issued.get() + 1;
            session.issued.set(seq);

            let request = fetch();
            let session = Rc::clone(&session);
            let on_result = Rc::clone(&on_result);

            scheduler.spawn(Box::pin(async move {
                let result = request.await;

                if session.epoch.get() != epoch {
                    log::debug!("Discarding result of poll tick {} after stop", seq);
                    return;
                }

                let latest = session.latest_completed.get();
                if seq < latest {
                    log::debug!(
                        "Poll tick {} completed after tick {}; applying anyway",
                        seq,
                        latest
                    );
                } else {
                    session.latest_completed.set(seq);
                }

                if let Err(e) = &result {
                    log::warn!("Poll tick {} failed: {}", seq, e);
                }

                (*on_result)(result);
            }));
        };

        log::debug!("Poller started with {} ms interval", interval_ms);
        issue();
        self.interval = Some(self.scheduler.every(interval_ms, Box::new(issue)));
    }
}

impl<S: Scheduler> Drop for Poller<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
