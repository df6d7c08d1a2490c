// PicSeek - ui/theme.rs
//
// Colour scheme for the two-pane viewport.
// No dependencies on app state or business logic.

use egui::Color32;

/// Ink colour for affordance rings and arrows (near-black on the light theme).
pub const INK: Color32 = Color32::from_rgb(34, 34, 34);

/// Faint ink wash shown inside an affordance while hovered.
pub const INK_HOVER: Color32 = Color32::from_rgba_premultiplied(34, 34, 34, 18);

/// Status bar error text.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(185, 28, 28); // Red 800

/// Status bar in-progress text.
pub const BUSY_TEXT: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500
