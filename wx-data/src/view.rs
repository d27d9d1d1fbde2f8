//! Top-level dashboard state shared by the three panels.

use crate::models::RawWeatherData;
use crate::rows::{chart_rows, ChartRow};

/// Selected file, its content, and the file-list refresh counter.
///
/// `weather_data` belongs to `selected_file`: it is dropped the moment a
/// file is selected and only set again when that file's content arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    selected_file: Option<String>,
    selection_count: u64,
    weather_data: Option<RawWeatherData>,
    refresh_signal: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Bumped on every selection, including re-selecting the same file,
    /// so the content loader re-runs.
    pub fn selection_count(&self) -> u64 {
        self.selection_count
    }

    pub fn weather_data(&self) -> Option<&RawWeatherData> {
        self.weather_data.as_ref()
    }

    /// Bumped after each successful store; the file list reloads when it changes.
    pub fn refresh_signal(&self) -> u64 {
        self.refresh_signal
    }

    pub fn select_file(&mut self, name: impl Into<String>) {
        self.selected_file = Some(name.into());
        self.selection_count += 1;
        self.weather_data = None;
    }

    pub fn show_weather(&mut self, data: RawWeatherData) {
        self.weather_data = Some(data);
    }

    pub fn file_stored(&mut self) {
        self.refresh_signal += 1;
    }

    /// Rows of the selected file; empty until its content has arrived.
    pub fn chart_rows(&self) -> Vec<ChartRow> {
        self.weather_data.as_ref().map(chart_rows).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailySeries;

    fn one_day(date: &str) -> RawWeatherData {
        RawWeatherData {
            daily: Some(DailySeries {
                time: vec![date.to_string()],
                temperature_2m_max: vec![Some(12.0)],
                ..DailySeries::default()
            }),
            ..RawWeatherData::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.selected_file(), None);
        assert_eq!(view.weather_data(), None);
        assert_eq!(view.refresh_signal(), 0);
        assert!(view.chart_rows().is_empty());
    }

    #[test]
    fn test_selecting_clears_previous_rows() {
        let mut view = ViewState::new();
        view.select_file("a.json");
        view.show_weather(one_day("2024-01-01"));
        assert_eq!(view.chart_rows().len(), 1);

        view.select_file("b.json");
        assert_eq!(view.selected_file(), Some("b.json"));
        assert!(view.weather_data().is_none());
        assert!(view.chart_rows().is_empty());
    }

    #[test]
    fn test_reselecting_same_file_bumps_selection() {
        let mut view = ViewState::new();
        view.select_file("a.json");
        let first = view.selection_count();
        view.select_file("a.json");
        assert_eq!(view.selection_count(), first + 1);
    }

    #[test]
    fn test_file_stored_increments_by_one() {
        let mut view = ViewState::new();
        view.file_stored();
        assert_eq!(view.refresh_signal(), 1);
        view.file_stored();
        assert_eq!(view.refresh_signal(), 2);
    }
}
