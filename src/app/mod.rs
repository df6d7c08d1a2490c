// PicSeek - app/mod.rs
//
// Application layer: session state and the upload lifecycle.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod search;
pub mod state;
