//! Background scrape worker.
//!
//! The scrape runs on its own task and reports back over a channel, so the
//! presenting side only ever reacts to [`ScrapeEvent`]s and never shares
//! mutable state with the pipeline.

use crate::aggregator::{Aggregator, ScrapeReport};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// First status line of every run.
pub const STARTED_MESSAGE: &str = "Scraping in progress...";

#[derive(Debug)]
pub enum ScrapeEvent {
    /// Status line for display.
    Progress(String),
    /// Final result; always the last event of a run.
    Finished(ScrapeReport),
}

/// Start one scrape run in the background.
///
/// The receiver yields progress messages followed by exactly one
/// [`ScrapeEvent::Finished`]. Callers must not start another run until
/// that event arrives.
pub fn spawn(aggregator: Arc<Aggregator>) -> (JoinHandle<()>, UnboundedReceiver<ScrapeEvent>) {
    let (tx, rx) = unbounded_channel();

    let handle = tokio::spawn(async move {
        let progress_tx = tx.clone();
        let notify = move |message: &str| {
            if progress_tx.send(ScrapeEvent::Progress(message.to_string())).is_err() {
                debug!(%message, "Progress receiver gone");
            }
        };

        notify(STARTED_MESSAGE);
        let report = aggregator.scrape_all(Some(&notify)).await;

        if tx.send(ScrapeEvent::Finished(report)).is_err() {
            warn!("Scrape finished after the receiver was dropped");
        }
    });

    (handle, rx)
}
