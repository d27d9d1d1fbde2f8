//! Client side of the weather backend contract.
//!
//! - `config`: build-time selection of the backend base URL
//! - `operation`: the three endpoints as request descriptions plus response mappers
//! - `payload`: body decoding (including double-encoded JSON) and error detail extraction
//! - `client`: a `reqwest` wrapper that runs any [`Operation`]
//!
//! Only `client` performs I/O; everything it does with a response goes through
//! [`operation::interpret`], which is a pure function.

pub mod client;
pub mod config;
pub mod operation;
pub mod payload;

pub use client::GatewayClient;
pub use config::{ApiConfig, DeployProfile};
pub use operation::{FileContent, ListFiles, Operation, RequestSpec, StoreWeather};
