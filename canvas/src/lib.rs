//! Stroke recording and replay engine for the browser whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawn point log, the live brush settings, and the JSON snapshot that is
//! mirrored through `localStorage`. The host app is responsible only for
//! wiring DOM events, panels and storage notifications to the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`stroke`] | Point and stroke log types, sequence validation |
//! | [`state`] | Tool settings and the persisted snapshot codec |
//! | [`surface`] | Drawing surface trait and a call-recording fake |
//! | [`render`] | Browser 2D canvas surface |
//! | [`input`] | Pointer gesture state machine |
//! | [`store`] | Key-value persistence port |
//! | [`config`] | Palette, brush sizes, storage key and stroke policy |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared defaults |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod state;
pub mod store;
pub mod stroke;
pub mod surface;
