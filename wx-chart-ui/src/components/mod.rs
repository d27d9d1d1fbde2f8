//! Reusable Dioxus RSX components for the Weather Explorer dashboard.

mod chart_container;
mod error_display;
mod file_browser;
mod input_panel;
mod loading_spinner;
mod panel;
mod visualization_panel;
mod weather_table;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use file_browser::FileBrowser;
pub use input_panel::InputPanel;
pub use loading_spinner::LoadingSpinner;
pub use panel::Panel;
pub use visualization_panel::VisualizationPanel;
pub use weather_table::WeatherTable;
