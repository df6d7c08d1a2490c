// PicSeek - core/mod.rs
//
// Core logic layer: data model, payload decoding, and the backend transport.
// Dependencies: serde/serde_json, base64, image, reqwest.
// Must NOT depend on: ui, platform, app.

pub mod model;
pub mod transport;
