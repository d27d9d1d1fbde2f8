//! Data model and client-side state logic for the Weather Explorer dashboard.
//!
//! Everything in this crate is free of browser dependencies so it can be
//! tested natively:
//! - `models`: wire types exchanged with the weather backend
//! - `rows`: derivation of chart/table rows from a daily series
//! - `pager`: client-side pagination of those rows
//! - `remote`: the idle/loading/success/error slot shared by every panel
//! - `view`: top-level selection and refresh coordination

pub mod error;
pub mod models;
pub mod pager;
pub mod remote;
pub mod rows;
pub mod view;

pub use error::{FetchError, FormError};
pub use models::{
    DailySeries, DailyUnits, FileList, FileMetadata, QueryField, QueryForm, RawWeatherData,
    StoredFile, WeatherQuery,
};
pub use pager::Pager;
pub use remote::{Remote, RemoteState, Resolution, Ticket};
pub use rows::{chart_rows, ChartRow};
pub use view::ViewState;
