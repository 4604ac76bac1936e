//! Metro-map view engine for the chat-driven map client.
//!
//! This crate is browser-free on purpose: it owns the metro-map domain model,
//! the pure render-model builder that turns stations and lines into drawable
//! nodes and edges, and the camera/engine core used for viewport focus and
//! pointer-coordinate capture. The Leptos host crate wires DOM events and
//! network payloads into these types; everything here is testable with plain
//! `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`map`] | Station/line domain model and the id-keyed map aggregate |
//! | [`view_model`] | Pure node/edge derivation for the diagram surface |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`engine`] | Testable engine core: map snapshot, focus, click capture |
//! | [`consts`] | Shared numeric constants (scaling, focus zoom, colors) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod map;
pub mod view_model;
