// PicSeek - ui/panels/mod.rs

pub mod query;
pub mod results;
pub mod viewport;

use crate::ui::theme;
use crate::util::constants;

/// Draw one circular affordance (the query and reset controls) centred on
/// `center` with a single arrow glyph, and return its click response.
///
/// Registered as its own widget, so egui's hit-testing routes a click here
/// instead of to any click-sensing pane behind it.
pub(crate) fn affordance(
    ui: &mut egui::Ui,
    center: egui::Pos2,
    glyph: &str,
    id_salt: &str,
) -> egui::Response {
    let diameter = constants::AFFORDANCE_DIAMETER;
    let rect = egui::Rect::from_center_size(center, egui::vec2(diameter, diameter));
    let response = ui.interact(rect, ui.id().with(id_salt), egui::Sense::click());

    let painter = ui.painter();
    if response.hovered() {
        painter.circle_filled(center, diameter / 2.0, theme::INK_HOVER);
    }
    painter.circle_stroke(
        center,
        diameter / 2.0,
        egui::Stroke::new(constants::AFFORDANCE_STROKE, theme::INK),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(constants::AFFORDANCE_ARROW_SIZE),
        theme::INK,
    );

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
