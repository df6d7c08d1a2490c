// PicSeek - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O, the network.

pub mod panels;
pub mod theme;
