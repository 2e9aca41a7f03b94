//! Per-view dashboard state and the refresh loop that keeps it current.
//!
//! A [`Dashboard`] owns the state of one view: its phase and the latest
//! [`Snapshot`]. Both are published together through a `tokio::sync::watch`
//! channel, so readers always see a consistent pair. [`Dashboard::spawn`] starts
//! the timer loop and returns a [`DashboardHandle`]; shutting the handle down (or
//! dropping it) tears the view down.

use crate::aggregate::Snapshot;
use crate::config::DashboardConfig;
use crate::source::StationSource;
use crate::types::station::StationRecord;
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;

/// Lifecycle phase of a dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPhase {
    /// No cycle has completed yet.
    Loading,
    /// The snapshot reflects the latest completed cycle. It may be empty.
    Ready,
    /// The last cycle failed outside the data source's own error handling.
    /// The previous snapshot is kept; the next good cycle returns to `Ready`.
    Error(String),
}

/// What a view renders: its phase plus the snapshot it should show.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub phase: DashboardPhase,
    pub snapshot: Arc<Snapshot>,
}

impl DashboardState {
    fn loading() -> Self {
        Self {
            phase: DashboardPhase::Loading,
            snapshot: Arc::new(Snapshot::empty()),
        }
    }
}

/// State for one dashboard view, refreshed from a [`StationSource`].
///
/// # Examples
///
/// ```no_run
/// # use windbird::{Dashboard, DashboardConfig, StationClient, WindbirdError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WindbirdError> {
/// let client = StationClient::builder().build()?;
/// let handle = Dashboard::new(client, DashboardConfig::default()).spawn();
/// let mut updates = handle.subscribe();
/// while updates.changed().await.is_ok() {
///     let state = updates.borrow_and_update().clone();
///     println!("{:?}: {:?}", state.phase, state.snapshot.summary);
/// }
/// handle.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub struct Dashboard<S: StationSource> {
    source: Arc<S>,
    config: DashboardConfig,
    state: watch::Sender<DashboardState>,
}

impl<S: StationSource> Dashboard<S> {
    pub fn new(source: S, config: DashboardConfig) -> Self {
        let (state, _) = watch::channel(DashboardState::loading());
        Self {
            source: Arc::new(source),
            config,
            state,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Runs one fetch-and-recompute cycle and publishes the result.
    pub async fn refresh_once(&self) {
        let outcome = self.start_fetch().await;
        self.complete_cycle(outcome);
    }

    /// Starts the refresh loop on its own task.
    ///
    /// The first cycle runs immediately, then once per refresh interval. A cycle
    /// always finishes before the next one starts; ticks missed while a slow
    /// fetch is in flight are skipped rather than queued.
    pub fn spawn(self) -> DashboardHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(());
        let state = self.subscribe();
        let task = tokio::spawn(self.run(shutdown_rx));
        DashboardHandle {
            shutdown: shutdown_tx,
            state,
            task,
        }
    }

    async fn run(self, mut shutdown: watch::Receiver<()>) {
        let period = self.config.effective_refresh_interval();
        info!("Starting dashboard refresh loop ({:?} interval)", period);

        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("Dashboard shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let fetch = self.start_fetch();
                    tokio::select! {
                        // The fetch task is detached, its result is never published.
                        _ = shutdown.changed() => {
                            debug!("Dashboard torn down during a fetch, discarding its result");
                            break;
                        }
                        outcome = fetch => self.complete_cycle(outcome),
                    }
                }
            }
        }
    }

    // Fetching on a separate task turns a panicking source into a JoinError
    // instead of taking the loop down with it.
    fn start_fetch(&self) -> JoinHandle<Vec<StationRecord>> {
        let source = Arc::clone(&self.source);
        tokio::spawn(async move { source.fetch_all_stations().await })
    }

    fn complete_cycle(&self, outcome: Result<Vec<StationRecord>, JoinError>) {
        match outcome {
            Ok(raw) => {
                let snapshot = Snapshot::from_stations(&raw, &self.config.bounds);
                if snapshot.is_empty() {
                    warn!("Refresh produced no stations inside the bounds");
                } else {
                    info!(
                        "Refreshed {} stations in bounds ({} active) out of {} fetched",
                        snapshot.summary.total_stations,
                        snapshot.summary.active_stations,
                        raw.len()
                    );
                }
                self.state.send_replace(DashboardState {
                    phase: DashboardPhase::Ready,
                    snapshot: Arc::new(snapshot),
                });
            }
            Err(e) => {
                error!("Station refresh failed: {}", e);
                self.state
                    .send_modify(|state| state.phase = DashboardPhase::Error(e.to_string()));
            }
        }
    }
}

/// Handle to a running dashboard loop.
///
/// Dropping the handle stops the loop as well; [`DashboardHandle::shutdown`]
/// additionally waits for it to finish.
pub struct DashboardHandle {
    shutdown: watch::Sender<()>,
    state: watch::Receiver<DashboardState>,
    task: JoinHandle<()>,
}

impl DashboardHandle {
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.clone()
    }

    /// A copy of the most recently published state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Stops the refresh timer and waits for the loop to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            warn!("Dashboard task ended abnormally: {}", e);
        }
    }
}
