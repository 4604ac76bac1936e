//! Networking modules for the backend HTTP boundary and the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the wire schema and its
//! conversion into the client model, `error` the failure taxonomy, and
//! `chatkit` the typed command contract with the embedded chat widget.

pub mod api;
pub mod chatkit;
pub mod error;
pub mod types;
