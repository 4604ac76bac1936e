//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`map`, `ui`, `news`, `cat`) so individual
//! components can depend on small focused models. Each is created once in
//! `App` as an `RwSignal` and provided via context — never a global.

pub mod cat;
pub mod map;
pub mod news;
pub mod ui;
