//! Shared Dioxus components and D3.js bridge for the Weather Explorer dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js temperature chart via `js_sys::eval()`
//! - `state`: `AppState` with the view signal and the gateway client
//! - `remote`: hook that runs a gateway operation into a `Remote` slot
//! - `components`: the three panels and their building blocks

pub mod components;
pub mod js_bridge;
pub mod remote;
pub mod state;
