// PicSeek - ui/panels/results.rs
//
// The results pane: a circular reset affordance (left arrow) followed by
// the result images in one of two layouts.
//
//   Compact:  thumbnails at a small fixed height wrapping into a
//             width-constrained grid, vertical scroll on overflow.
//   Expanded: one row of large images in a horizontal scroll strip.
//
// Order always follows the backend's relevance order (results[i] pairs with
// textures[i]).
//
// Click policy: the reset affordance and the images' pane background are
// separate widgets. egui routes a click on the affordance to the affordance
// only, so resetting can never also toggle the layout; a click anywhere
// else in the pane toggles it.

use crate::app::state::SessionState;
use crate::core::model::LayoutMode;
use crate::util::constants;

/// Render the results pane into the current ui rect.
///
/// `textures` holds one GPU texture per result, in result order.
/// `thumb_height` is the configured compact-mode thumbnail height.
pub fn render(
    ui: &mut egui::Ui,
    state: &mut SessionState,
    textures: &[egui::TextureHandle],
    thumb_height: f32,
) {
    let pane = ui.max_rect();

    // Pane background click sense, registered before the children so the
    // affordance and scroll bars stay on top in hit-testing.
    let background = ui.interact(pane, ui.id().with("results_background"), egui::Sense::click());

    let margin = constants::AFFORDANCE_DIAMETER / 4.0;
    let reset_center = egui::pos2(
        pane.left() + margin + constants::AFFORDANCE_DIAMETER / 2.0,
        pane.center().y,
    );
    let reset = super::affordance(ui, reset_center, "\u{2190}", "reset_affordance");

    let content = egui::Rect::from_min_max(
        egui::pos2(reset_center.x + constants::AFFORDANCE_DIAMETER / 2.0 + margin, pane.top()),
        pane.max,
    );
    ui.scope_builder(egui::UiBuilder::new().max_rect(content), |ui| {
        match state.mode {
            LayoutMode::Compact => render_compact(ui, textures, thumb_height),
            LayoutMode::Expanded => render_expanded(ui, textures, content.height()),
        }
    });

    // Handle clicks after rendering so child widgets got their chance to
    // claim them first.
    if reset.clicked() {
        state.clear_results();
    } else if background.clicked() {
        state.toggle_mode();
    }
}

/// Wrapped grid of small thumbnails, vertically centred when it fits.
fn render_compact(ui: &mut egui::Ui, textures: &[egui::TextureHandle], thumb_height: f32) {
    egui::ScrollArea::vertical()
        .id_salt("results_compact")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                // Rough vertical centring: pad by the free space above the
                // grid's estimated height.
                let rows = estimated_rows(ui.available_width(), textures, thumb_height);
                let grid_height = rows as f32 * (thumb_height + constants::THUMB_SPACING);
                let free = (ui.available_height() - grid_height).max(0.0);
                ui.add_space(free / 2.0);

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing =
                        egui::vec2(constants::THUMB_SPACING, constants::THUMB_SPACING);
                    for texture in textures {
                        ui.image((texture.id(), fitted_size(texture, thumb_height)));
                    }
                });
            });
        });
}

/// Single horizontally scrollable row of large images.
fn render_expanded(ui: &mut egui::Ui, textures: &[egui::TextureHandle], pane_height: f32) {
    let image_height = pane_height * constants::EXPANDED_HEIGHT_FRAC;
    egui::ScrollArea::horizontal()
        .id_salt("results_expanded")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.with_layout(
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    ui.spacing_mut().item_spacing =
                        egui::vec2(constants::EXPANDED_SPACING, 0.0);
                    for texture in textures {
                        ui.image((texture.id(), fitted_size(texture, image_height)));
                    }
                },
            );
        });
}

/// Display size for a texture scaled to the given height, aspect preserved.
fn fitted_size(texture: &egui::TextureHandle, height: f32) -> egui::Vec2 {
    let size = texture.size_vec2();
    let aspect = if size.y > 0.0 { size.x / size.y } else { 1.0 };
    egui::vec2(height * aspect, height)
}

/// Row count estimate for the compact grid, for vertical centring only.
fn estimated_rows(width: f32, textures: &[egui::TextureHandle], thumb_height: f32) -> usize {
    if textures.is_empty() || width <= 0.0 {
        return 0;
    }
    let mut rows = 1usize;
    let mut x = 0.0f32;
    for texture in textures {
        let w = fitted_size(texture, thumb_height).x + constants::THUMB_SPACING;
        if x + w > width && x > 0.0 {
            rows += 1;
            x = 0.0;
        }
        x += w;
    }
    rows
}
