//! Local UI chrome state (theme, add-station modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`map`) so
//! the modal flow can evolve independently of server data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme and the add-station dialog.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Whether the dark color scheme is active.
    pub dark_mode: bool,
    /// Whether the add-station modal is open.
    pub add_station_open: bool,
    /// Form values, kept across the location-select round trip so the
    /// modal reopens with what the user already typed.
    pub form: AddStationForm,
}

/// Values of the add-station form. The captured location lives in
/// `MapState.pending_location`, since the map surface writes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddStationForm {
    pub name: String,
    pub line_id: Option<String>,
}

impl UiState {
    /// Close the modal and clear the form, for cancel and for successful
    /// submission.
    pub fn reset_add_station(&mut self) {
        self.add_station_open = false;
        self.form = AddStationForm::default();
    }
}
