// PicSeek - app/state.rs
//
// Session state: the current result set, layout mode, last error, and the
// in-flight request bookkeeping. The single source of truth for what is
// rendered. Owned by the eframe::App implementation.
//
// The state machine has two states, derived from the result set:
//   Idle    (results empty)     — query pane focused.
//   Showing (results non-empty) — results pane focused.
// Transitions: Idle -> Showing on an accepted successful upload;
// Showing -> Idle on reset; Showing -> Showing on a replacing upload or a
// layout toggle. There is no terminal state.

use crate::core::model::{LayoutMode, ResultImage, ViewState};
use std::path::PathBuf;

/// Top-level session state.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current search results in backend relevance order.
    /// Replaced wholesale on each accepted completion; never partially
    /// mutated.
    pub results: Vec<ResultImage>,

    /// Active results-pane layout. Survives result replacement and reset.
    pub mode: LayoutMode,

    /// Error from the most recent accepted completion, if it failed.
    /// Cleared by the next successful completion or by reset.
    pub last_error: Option<String>,

    /// Whether the latest issued upload is still in flight.
    pub search_in_progress: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Set by the query pane (or File menu) to request the native file
    /// picker; serviced and cleared by the update loop.
    pub request_pick: bool,

    /// A file chosen for upload (picker or CLI); consumed by the update
    /// loop, which starts a search for it.
    pub pending_upload: Option<PathBuf>,

    /// Sequence number of the most recently issued upload. Completions
    /// carrying any other value are stale and must be discarded.
    latest_seq: u64,

    /// Bumped on every mutation of `results`. Renderers compare this to
    /// detect a replacement even when the new payload has the same length
    /// as the old one.
    results_revision: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            status_message: "Pick an image to search.".to_string(),
            ..Default::default()
        }
    }

    /// Current state of the interaction machine, derived from the results.
    pub fn view_state(&self) -> ViewState {
        ViewState::from_results(&self.results)
    }

    /// Horizontal slide target for the viewport. Pure derivation; callers
    /// animate toward this value but never store it.
    pub fn view_offset(&self, viewport_width: f32) -> f32 {
        self.view_state().view_offset(viewport_width)
    }

    /// Revision of the current result set. Changes exactly when `results`
    /// changes; stale completions and layout toggles leave it alone.
    pub fn results_revision(&self) -> u64 {
        self.results_revision
    }

    /// Unconditionally replace the result set.
    pub fn set_results(&mut self, results: Vec<ResultImage>) {
        self.results = results;
        self.results_revision += 1;
        self.last_error = None;
    }

    /// Clear results, returning to Idle. A no-op when already empty.
    pub fn clear_results(&mut self) {
        if !self.results.is_empty() {
            self.results.clear();
            self.results_revision += 1;
        }
        self.last_error = None;
    }

    /// Flip the layout mode. Does not change the interaction state.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Record a newly issued upload. Any previously issued upload becomes
    /// stale from this point on, even if it completes later.
    pub fn begin_search(&mut self, seq: u64) {
        self.latest_seq = seq;
        self.search_in_progress = true;
    }

    /// Acceptance gate for upload completions.
    ///
    /// Returns true when the completion was accepted and applied. A stale
    /// sequence number mutates nothing. An accepted failure sets
    /// `last_error` and leaves the result set untouched, so a failed search
    /// never knocks the view out of Showing.
    pub fn apply_search_outcome(
        &mut self,
        seq: u64,
        outcome: Result<Vec<ResultImage>, String>,
    ) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale completion");
            return false;
        }
        self.search_in_progress = false;
        match outcome {
            Ok(results) => {
                tracing::info!(seq, results = results.len(), "Search completed");
                self.set_results(results);
            }
            Err(error) => {
                tracing::warn!(seq, error = %error, "Search failed");
                self.last_error = Some(error);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(tag: u8) -> ResultImage {
        ResultImage {
            width: 1,
            height: 1,
            rgba: vec![tag, tag, tag, 255],
        }
    }

    #[test]
    fn successful_upload_moves_idle_to_showing() {
        let mut state = SessionState::new();
        assert_eq!(state.view_state(), ViewState::Idle);

        state.begin_search(1);
        assert!(state.apply_search_outcome(1, Ok(vec![img(1), img(2)])));

        assert_eq!(state.results.len(), 2);
        assert_eq!(state.view_state(), ViewState::Showing);
        assert!(!state.search_in_progress);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn failed_upload_leaves_results_untouched() {
        let mut state = SessionState::new();
        state.begin_search(1);
        state.apply_search_outcome(1, Ok(vec![img(1)]));

        state.begin_search(2);
        assert!(state.apply_search_outcome(2, Err("backend returned HTTP 500".into())));

        assert_eq!(state.results, vec![img(1)]);
        assert_eq!(state.view_state(), ViewState::Showing);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn failure_from_idle_stays_idle() {
        let mut state = SessionState::new();
        state.begin_search(1);
        state.apply_search_outcome(1, Err("connection refused".into()));
        assert_eq!(state.view_state(), ViewState::Idle);
        assert_eq!(state.view_offset(1000.0), 0.0);
    }

    #[test]
    fn reset_returns_to_idle_and_is_idempotent() {
        let mut state = SessionState::new();
        state.begin_search(1);
        state.apply_search_outcome(1, Ok(vec![img(1)]));
        assert_eq!(state.view_state(), ViewState::Showing);

        state.clear_results();
        assert_eq!(state.view_state(), ViewState::Idle);
        assert_eq!(state.view_offset(1000.0), 0.0);

        // Resetting again changes nothing and does not panic.
        state.clear_results();
        assert_eq!(state.view_state(), ViewState::Idle);
    }

    #[test]
    fn toggle_preserves_interaction_state() {
        let mut state = SessionState::new();
        state.begin_search(1);
        state.apply_search_outcome(1, Ok(vec![img(1)]));

        assert_eq!(state.mode, LayoutMode::Compact);
        state.toggle_mode();
        assert_eq!(state.mode, LayoutMode::Expanded);
        assert_eq!(state.view_state(), ViewState::Showing);
        state.toggle_mode();
        assert_eq!(state.mode, LayoutMode::Compact);
    }

    #[test]
    fn mode_survives_result_replacement_and_reset() {
        let mut state = SessionState::new();
        state.toggle_mode();
        state.begin_search(1);
        state.apply_search_outcome(1, Ok(vec![img(1)]));
        assert_eq!(state.mode, LayoutMode::Expanded);
        state.clear_results();
        assert_eq!(state.mode, LayoutMode::Expanded);
    }

    #[test]
    fn stale_completion_is_discarded() {
        // Overlap scenario: upload 1 issued, then upload 2 issued. Upload 2
        // resolves first and wins; upload 1 resolves later and is dropped.
        let mut state = SessionState::new();
        state.begin_search(1);
        state.begin_search(2);

        assert!(state.apply_search_outcome(2, Ok(vec![img(2)])));
        assert_eq!(state.results, vec![img(2)]);

        assert!(!state.apply_search_outcome(1, Ok(vec![img(1), img(1)])));
        assert_eq!(state.results, vec![img(2)], "stale result must not apply");
        assert!(!state.search_in_progress);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_success() {
        let mut state = SessionState::new();
        state.begin_search(1);
        state.begin_search(2);
        state.apply_search_outcome(2, Ok(vec![img(2)]));

        assert!(!state.apply_search_outcome(1, Err("slow failure".into())));
        assert!(state.last_error.is_none());
        assert_eq!(state.results, vec![img(2)]);
    }

    #[test]
    fn same_sized_replacement_bumps_results_revision() {
        // Showing -> Showing replacement where the new payload has the same
        // count as the old one: the revision must still change, or a
        // texture cache keyed on it would keep drawing the old search.
        let mut state = SessionState::new();
        state.begin_search(1);
        state.apply_search_outcome(1, Ok(vec![img(1), img(2)]));
        let before = state.results_revision();

        state.begin_search(2);
        state.apply_search_outcome(2, Ok(vec![img(3), img(4)]));
        assert_eq!(state.results.len(), 2);
        assert_ne!(state.results_revision(), before);
        assert_eq!(state.results, vec![img(3), img(4)]);
    }

    #[test]
    fn revision_tracks_result_mutations_only() {
        let mut state = SessionState::new();
        let initial = state.results_revision();

        // Failures, stale completions, and layout toggles leave it alone.
        state.begin_search(1);
        state.apply_search_outcome(1, Err("boom".into()));
        state.toggle_mode();
        assert_eq!(state.results_revision(), initial);

        state.begin_search(2);
        state.begin_search(3);
        state.apply_search_outcome(3, Ok(vec![img(1)]));
        let shown = state.results_revision();
        assert_ne!(shown, initial);
        assert!(!state.apply_search_outcome(2, Ok(vec![img(9)])));
        assert_eq!(state.results_revision(), shown);

        // Reset bumps once; a second reset is a true no-op.
        state.clear_results();
        let cleared = state.results_revision();
        assert_ne!(cleared, shown);
        state.clear_results();
        assert_eq!(state.results_revision(), cleared);
    }

    #[test]
    fn new_success_clears_previous_error() {
        let mut state = SessionState::new();
        state.begin_search(1);
        state.apply_search_outcome(1, Err("boom".into()));
        assert!(state.last_error.is_some());

        state.begin_search(2);
        state.apply_search_outcome(2, Ok(vec![img(7)]));
        assert!(state.last_error.is_none());
    }
}
