// PicSeek - ui/panels/viewport.rs
//
// The sliding viewport: two viewport-width panes laid out side by side and
// translated horizontally toward the derived view offset (0 when Idle, one
// viewport width to the left when Showing).
//
// The offset is never stored: each frame recomputes the target from session
// state and lets egui's value animation ease toward it, so the slide is
// smooth and interruptible (a reset mid-slide simply re-targets 0).

use crate::app::state::SessionState;
use crate::ui::panels::{query, results};
use crate::util::constants;

/// Render the central sliding viewport.
pub fn render(
    ui: &mut egui::Ui,
    state: &mut SessionState,
    textures: &[egui::TextureHandle],
    thumb_height: f32,
) {
    let viewport = ui.max_rect();
    let width = viewport.width();

    let target = state.view_offset(width);
    let offset = ui.ctx().animate_value_with_time(
        egui::Id::new("viewport_slide"),
        target,
        constants::SLIDE_SECONDS,
    );

    let query_rect = viewport.translate(egui::vec2(offset, 0.0));
    let results_rect = viewport.translate(egui::vec2(offset + width, 0.0));

    // Both panes are laid out every frame; egui clips whatever falls
    // outside the central panel, so the off-screen pane costs little.
    ui.scope_builder(egui::UiBuilder::new().max_rect(query_rect), |ui| {
        query::render(ui, state);
    });
    ui.scope_builder(egui::UiBuilder::new().max_rect(results_rect), |ui| {
        results::render(ui, state, textures, thumb_height);
    });
}
