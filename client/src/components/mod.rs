//! UI components shared across pages.

pub mod add_station_modal;
pub mod chat_host;
pub mod map_host;
