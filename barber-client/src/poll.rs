//! Polling scheduler
//!
//! Re-runs a page pipeline on a fixed interval and on explicit triggers
//! (filter change, manual refresh, landed mutations). Search input is
//! debounced before it reaches the pipeline. The loop runs until its
//! `CancellationToken` fires, so a page context can stop its scheduler
//! deterministically.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::api::Resource;
use crate::pipeline::Pipeline;

/// Background refresh interval
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);
/// Debounce window for search-input triggers
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
/// Trigger channel depth; bursts beyond it coalesce into what is queued
const TRIGGER_BUFFER: usize = 16;

/// Refresh request entering the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refresh {
    Immediate,
    Collection(Resource),
    Debounced,
}

/// Cheap cloneable handle feeding triggers into a running scheduler
#[derive(Clone)]
pub struct SchedulerHandle {
    trigger_tx: mpsc::Sender<Refresh>,
    shutdown: CancellationToken,
}

impl SchedulerHandle {
    /// Run the full pipeline as soon as possible (manual refresh, startup)
    pub fn refresh_now(&self) {
        self.send(Refresh::Immediate);
    }

    /// A filter control changed; re-run the full pipeline immediately
    pub fn filter_changed(&self) {
        self.send(Refresh::Immediate);
    }

    /// Search input changed; re-run after the debounce window settles
    pub fn search_changed(&self) {
        self.send(Refresh::Debounced);
    }

    /// A mutation landed; re-fetch the owning collection
    pub fn collection_changed(&self, resource: Resource) {
        self.send(Refresh::Collection(resource));
    }

    /// Stop the scheduler loop
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    fn send(&self, request: Refresh) {
        if self.trigger_tx.try_send(request).is_err() {
            tracing::debug!(?request, "trigger queue full, coalescing");
        }
    }
}

/// Repeating driver of a page pipeline
pub struct PollingScheduler {
    pipeline: Arc<dyn Pipeline>,
    interval: Duration,
    debounce: Duration,
    trigger_rx: mpsc::Receiver<Refresh>,
    shutdown: CancellationToken,
}

impl PollingScheduler {
    pub fn new(
        pipeline: Arc<dyn Pipeline>,
        interval: Duration,
        debounce: Duration,
    ) -> (Self, SchedulerHandle) {
        let (trigger_tx, trigger_rx) = mpsc::channel(TRIGGER_BUFFER);
        let shutdown = CancellationToken::new();
        let handle = SchedulerHandle {
            trigger_tx,
            shutdown: shutdown.clone(),
        };
        let scheduler = Self {
            pipeline,
            interval,
            debounce,
            trigger_rx,
            shutdown,
        };
        (scheduler, handle)
    }

    /// Scheduler with the reference timings
    pub fn with_defaults(pipeline: Arc<dyn Pipeline>) -> (Self, SchedulerHandle) {
        Self::new(pipeline, POLL_INTERVAL, SEARCH_DEBOUNCE)
    }

    /// Scheduler with timings from the client configuration
    pub fn from_config(
        pipeline: Arc<dyn Pipeline>,
        config: &crate::ClientConfig,
    ) -> (Self, SchedulerHandle) {
        Self::new(pipeline, config.poll_interval(), config.search_debounce())
    }

    /// Main loop: tick, drain triggers, settle debounces, until cancelled.
    /// The caller spawns this.
    pub async fn run(self) {
        let Self {
            pipeline,
            interval: period,
            debounce,
            mut trigger_rx,
            shutdown,
        } = self;
        tracing::info!(interval = ?period, "polling scheduler started");
        // first tick lands one full interval from now; the initial render is
        // the page context's explicit refresh_now
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut search_deadline: Option<Instant> = None;

        loop {
            let deadline = search_deadline;
            let debounce_expired = async move {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = interval.tick() => pipeline.run().await,
                _ = debounce_expired => {
                    search_deadline = None;
                    pipeline.run().await;
                }
                request = trigger_rx.recv() => match request {
                    None => break,
                    Some(Refresh::Immediate) => {
                        search_deadline = None;
                        pipeline.run().await;
                    }
                    Some(Refresh::Collection(resource)) => {
                        pipeline.refresh(resource).await;
                    }
                    Some(Refresh::Debounced) => {
                        // every keystroke restarts the window
                        search_deadline = Some(Instant::now() + debounce);
                    }
                }
            }
        }
        tracing::info!("polling scheduler stopped");
    }
}
