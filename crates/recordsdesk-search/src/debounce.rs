//! Debounced write scheduling for the persisted browse view
//!
//! Models "schedule write, cancel-and-reschedule on new input, flush after
//! quiet period" with a single owned timer. Within the quiet window the
//! last write wins; earlier pending writes are discarded without ever
//! reaching the sink.

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::debug;

enum Msg<T> {
    Update(T),
    Flush(oneshot::Sender<()>),
}

/// A debounced, last-write-wins sink
///
/// `update` supersedes any pending value and restarts the quiet-period
/// timer; the sink sees at most one write per quiet window. Dropping the
/// handle flushes any pending value before the worker exits.
pub struct DebouncedSync<T> {
    tx: mpsc::UnboundedSender<Msg<T>>,
}

impl<T: Send + 'static> DebouncedSync<T> {
    /// Spawn the timer worker with the given quiet period and sink
    pub fn new<F>(quiet: Duration, mut sink: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Msg<T>>();

        tokio::spawn(async move {
            let mut pending: Option<T> = None;
            let timer = tokio::time::sleep(quiet);
            tokio::pin!(timer);

            loop {
                tokio::select! {
                    msg = rx.recv() => match msg {
                        Some(Msg::Update(value)) => {
                            if pending.is_some() {
                                debug!("superseding pending write");
                            }
                            pending = Some(value);
                            timer.as_mut().reset(Instant::now() + quiet);
                        }
                        Some(Msg::Flush(ack)) => {
                            if let Some(value) = pending.take() {
                                sink(value);
                            }
                            let _ = ack.send(());
                        }
                        // Handle dropped: final flush, then stop
                        None => {
                            if let Some(value) = pending.take() {
                                sink(value);
                            }
                            break;
                        }
                    },
                    () = &mut timer, if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            sink(value);
                        }
                    }
                }
            }
        });

        Self { tx }
    }

    /// Schedule a write, superseding any pending one
    pub fn update(&self, value: T) {
        let _ = self.tx.send(Msg::Update(value));
    }

    /// Write any pending value immediately and wait for it to land
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(Msg::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}
