// PicSeek - app/search.rs
//
// Upload lifecycle management. Runs each search on its own background
// thread, sending progress messages to the UI thread via an mpsc channel.
//
// Architecture:
//   - `SearchManager` lives on the UI thread; `run_search` runs on a
//     background thread.
//   - Every upload gets a monotonically increasing sequence number; the
//     session state accepts only completions carrying the latest one, so a
//     slow stale response never overwrites a newer result.
//   - Overlapping uploads are allowed and uncoordinated beyond the sequence
//     gate; there is no cancellation and no timeout. The UI stays live while
//     uploads are in flight.

use crate::core::model::{decode_results, SearchProgress};
use crate::core::transport::SearchClient;
use crate::util::error::PicSeekError;
use std::path::PathBuf;
use std::sync::mpsc;

/// Manages search uploads on background threads.
pub struct SearchManager {
    /// Channel receiver for the UI to poll progress messages. All worker
    /// threads share the one channel.
    progress_rx: mpsc::Receiver<SearchProgress>,

    /// Sender cloned into each worker thread.
    progress_tx: mpsc::Sender<SearchProgress>,

    /// Backend client; cloned into each worker thread.
    client: SearchClient,

    /// Next sequence number to issue.
    next_seq: u64,
}

impl SearchManager {
    pub fn new(client: SearchClient) -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        Self {
            progress_rx,
            progress_tx,
            client,
            next_seq: 0,
        }
    }

    /// Start searching for images similar to the file at `path`.
    ///
    /// Spawns a background thread immediately and returns the issued
    /// sequence number; the caller must record it via
    /// `SessionState::begin_search` before polling.
    pub fn start_search(&mut self, path: PathBuf) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;

        let tx = self.progress_tx.clone();
        let client = self.client.clone();

        std::thread::spawn(move || {
            run_search(seq, path, client, tx);
        });

        tracing::info!(seq, "Search started");
        seq
    }

    /// Poll for progress messages without blocking. Returns all pending
    /// messages in arrival order.
    pub fn poll_progress(&self) -> Vec<SearchProgress> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.progress_rx.try_recv() {
            messages.push(msg);
        }
        messages
    }
}

// =============================================================================
// Background upload pipeline
// =============================================================================

/// Full upload pipeline: read file -> upload -> decode payload.
///
/// Runs on a background thread. Sends `SearchProgress` messages to `tx`;
/// a send failure means the UI has shut down and the thread exits quietly.
fn run_search(seq: u64, path: PathBuf, client: SearchClient, tx: mpsc::Sender<SearchProgress>) {
    if tx.send(SearchProgress::Started { seq }).is_err() {
        return;
    }

    match upload_and_decode(&path, &client) {
        Ok(results) => {
            let _ = tx.send(SearchProgress::Completed { seq, results });
        }
        Err(e) => {
            tracing::debug!(seq, error = %e, path = %path.display(), "Upload pipeline failed");
            let _ = tx.send(SearchProgress::Failed {
                seq,
                error: e.to_string(),
            });
        }
    }
}

fn upload_and_decode(
    path: &std::path::Path,
    client: &SearchClient,
) -> Result<Vec<crate::core::model::ResultImage>, PicSeekError> {
    let bytes = std::fs::read(path).map_err(|source| PicSeekError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    let encoded = client.upload(bytes)?;
    let results = decode_results(&encoded)?;
    Ok(results)
}
