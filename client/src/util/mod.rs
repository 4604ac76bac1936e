pub mod dark_mode;
pub mod station_actions;
