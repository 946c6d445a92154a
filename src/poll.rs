//! Periodic market polling — `MarketPoller`.
//!
//! A cancellable background refresh task with:
//! - Explicit `start`/`stop` tied to the observing view's lifetime
//! - Fixed-period ticks independent of fetch completion time (overlapping
//!   requests for the same key coalesce in the response cache)
//! - Manual refresh on demand
//! - Stream-based snapshot delivery to the consumer

use std::pin::Pin;
use std::time::Duration;

use futures_util::stream::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::CoinDashClient;
use crate::domain::market::{CoinMarket, MarketsQuery};

/// Fixed polling period of the live dashboard.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Polling parameters.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval: Duration,
    pub query: MarketsQuery,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            query: MarketsQuery::default(),
        }
    }
}

/// Events delivered to the consumer.
#[derive(Debug, Clone)]
pub enum PollEvent {
    /// A full market snapshot, superseding the previous one wholesale.
    Snapshot(Vec<CoinMarket>),
    /// A refresh cycle failed after retries; the previous snapshot stays
    /// valid on the consumer's side.
    Error(String),
}

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    Refresh,
    Stop,
}

// ─── Background task state ───────────────────────────────────────────────────

struct TaskState {
    client: CoinDashClient,
    config: PollConfig,
    event_tx: mpsc::Sender<PollEvent>,
    cmd_rx: mpsc::Receiver<Command>,
}

impl TaskState {
    fn emit(&self, event: PollEvent) {
        let _ = self.event_tx.try_send(event);
    }
}

// ─── Public MarketPoller ─────────────────────────────────────────────────────

/// Periodic market-data poller.
///
/// Uses a background tokio task; the public API communicates with it via
/// mpsc channels. Dropping the poller aborts the task.
pub struct MarketPoller {
    config: PollConfig,
    cmd_tx: Option<mpsc::Sender<Command>>,
    event_rx: tokio::sync::Mutex<mpsc::Receiver<PollEvent>>,
    event_tx: mpsc::Sender<PollEvent>,
    task_handle: Option<JoinHandle<()>>,
}

impl MarketPoller {
    /// Create a new poller. Does not start polling yet.
    pub fn new(config: PollConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel(64);
        Self {
            config,
            cmd_tx: None,
            event_rx: tokio::sync::Mutex::new(event_rx),
            event_tx,
            task_handle: None,
        }
    }

    /// Start polling with the given client.
    ///
    /// The first fetch happens immediately, then once per period. Calling
    /// `start` while already running is a no-op.
    pub fn start(&mut self, client: CoinDashClient) {
        if self.cmd_tx.is_some() {
            return;
        }

        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        self.cmd_tx = Some(cmd_tx);

        let state = TaskState {
            client,
            config: self.config.clone(),
            event_tx: self.event_tx.clone(),
            cmd_rx,
        };

        self.task_handle = Some(tokio::spawn(run_task(state)));
    }

    /// Stop polling.
    ///
    /// Sends a graceful stop to the background task and waits for it to
    /// finish. Cached responses remain and are naturally superseded if
    /// polling is started again.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(Command::Stop).await;
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        }
    }

    /// Request an immediate refresh outside the fixed period.
    ///
    /// Returns `false` if the poller is not running.
    pub fn refresh(&self) -> bool {
        match &self.cmd_tx {
            Some(tx) => tx.try_send(Command::Refresh).is_ok(),
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.cmd_tx.is_some()
    }

    /// Get a stream of poll events.
    ///
    /// The returned stream borrows `self`, so it must be dropped before
    /// calling `stop()`.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = PollEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(
            &self.event_rx,
            |rx| async move {
                let mut guard = rx.lock().await;
                guard.recv().await.map(|event| (event, rx))
            },
        ))
    }
}

impl Drop for MarketPoller {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

async fn run_task(mut state: TaskState) {
    let mut ticker = tokio::time::interval(state.config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                fetch_and_emit(&state).await;
            }
            cmd = state.cmd_rx.recv() => match cmd {
                Some(Command::Refresh) => {
                    ticker.reset();
                    fetch_and_emit(&state).await;
                }
                Some(Command::Stop) | None => {
                    tracing::info!("market poller stopped");
                    return;
                }
            }
        }
    }
}

async fn fetch_and_emit(state: &TaskState) {
    match state.client.markets().list(&state.config.query).await {
        Ok(snapshot) => {
            tracing::debug!(coins = snapshot.len(), "poll snapshot");
            state.emit(PollEvent::Snapshot(snapshot));
        }
        Err(e) => {
            tracing::warn!("poll refresh failed: {e}");
            state.emit(PollEvent::Error(e.to_string()));
        }
    }
}
