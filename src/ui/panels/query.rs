// PicSeek - ui/panels/query.rs
//
// The query pane: one circular affordance with a right-pointing arrow,
// centred in the pane. Clicking it requests the native file picker; the
// picker itself is opened by the update loop, keeping this panel free of
// any dialog or I/O concern.

use crate::app::state::SessionState;

/// Render the query pane into the current ui rect.
pub fn render(ui: &mut egui::Ui, state: &mut SessionState) {
    let pane = ui.max_rect();
    let response = super::affordance(ui, pane.center(), "\u{2192}", "query_affordance");

    if response.clicked() {
        state.request_pick = true;
    }
}
