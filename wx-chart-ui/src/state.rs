//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider` and retrieved by
//! the panels with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wx_data::{RawWeatherData, ViewState};
use wx_gateway::{ApiConfig, GatewayClient};

/// Cross-panel state of the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selected file, its content and the file-list refresh counter
    pub view: Signal<ViewState>,
    /// Client for the weather backend
    pub gateway: Signal<GatewayClient>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("Weather backend: {}", config.base_url());
        Self {
            view: Signal::new(ViewState::new()),
            gateway: Signal::new(GatewayClient::new(config)),
        }
    }

    /// Client handle for a spawned request. Does not subscribe the caller.
    pub fn gateway(&self) -> GatewayClient {
        self.gateway.peek().clone()
    }

    /// Select a file; its previous content is dropped right away.
    pub fn select_file(&mut self, name: String) {
        self.view.write().select_file(name);
    }

    pub fn show_weather(&mut self, data: RawWeatherData) {
        self.view.write().show_weather(data);
    }

    /// Tell the file list a new file exists.
    pub fn file_stored(&mut self) {
        self.view.write().file_stored();
    }
}
