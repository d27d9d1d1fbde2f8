//! HTTP client for the weather backend.

use crate::config::ApiConfig;
use crate::operation::{interpret, Operation};
use log::{info, warn};
use wx_data::FetchError;

/// Runs [`Operation`]s against the configured backend.
///
/// Cheap to clone (the inner `reqwest::Client` is reference counted), so it
/// can live in Dioxus context and be moved into spawned tasks. In the browser
/// `reqwest` sits on top of `fetch`.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send the operation's request and map the response.
    ///
    /// No timeout and no retry: a request that never answers keeps its
    /// caller waiting, and failures are left to the user to re-trigger.
    pub async fn run<O: Operation + ?Sized>(&self, op: &O) -> Result<O::Output, FetchError> {
        let spec = op.request();
        let url = spec
            .url(self.config.base_url())
            .map_err(FetchError::network)?;
        info!("{}: {} {}", op.name(), spec.method, url);

        let builder = self.http.request(spec.method.clone(), url);
        let builder = match &spec.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let outcome = match builder.send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => interpret(op, status, &body),
                    Err(e) => Err(FetchError::network(e)),
                }
            }
            Err(e) => Err(FetchError::network(e)),
        };

        match &outcome {
            Ok(_) => info!("{}: done", op.name()),
            Err(e) => warn!("{} failed: {}", op.name(), e.reason()),
        }
        outcome
    }
}
