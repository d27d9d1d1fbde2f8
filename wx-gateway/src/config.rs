//! Backend base URL, chosen once at build time.
//!
//! `weather-explorer/build.rs` exports `WX_DEPLOY_PROFILE` and, when set,
//! `WX_API_BASE_URL`; the app passes both to [`ApiConfig::resolve`].

use log::warn;

pub const LOCAL_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEPLOYED_BASE_URL: &str = "https://inrisk-weather-explorer.onrender.com";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeployProfile {
    /// Backend running next to the dev server
    #[default]
    Local,
    /// Hosted backend
    Deployed,
}

impl DeployProfile {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "local" | "dev" | "development" => Some(DeployProfile::Local),
            "deployed" | "prod" | "production" | "release" => Some(DeployProfile::Deployed),
            _ => None,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            DeployProfile::Local => LOCAL_BASE_URL,
            DeployProfile::Deployed => DEPLOYED_BASE_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DeployProfile::default().base_url())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// An explicit, non-empty base URL wins; otherwise the profile decides.
    /// Unknown profile names fall back to the local backend.
    pub fn resolve(profile: Option<&str>, base_url_override: Option<&str>) -> Self {
        if let Some(url) = base_url_override.filter(|u| !u.trim().is_empty()) {
            return Self::new(url);
        }
        let profile = match profile {
            Some(name) => DeployProfile::parse(name).unwrap_or_else(|| {
                warn!("Unknown deploy profile {:?}, using local backend", name);
                DeployProfile::Local
            }),
            None => DeployProfile::default(),
        };
        Self::new(profile.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
