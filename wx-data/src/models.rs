//! Wire types exchanged with the weather backend.
//!
//! Responses are deserialized leniently: absent fields and JSON `null` fall
//! back to empty values so a partially filled file still renders.

use crate::error::FormError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use wx_utils::{dates, sizes};

/// Treat `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list of strings where `null` entries become empty strings, keeping
/// their position.
fn null_entries_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<String>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries.into_iter().map(Option::unwrap_or_default).collect())
}

/// One stored weather file as reported by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Object key; unique per file
    pub name: String,
    /// Size in bytes
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u64,
    /// RFC 3339 timestamp of the upload
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl FileMetadata {
    /// Size in kilobytes, e.g. `1.5 KB`.
    pub fn size_label(&self) -> String {
        sizes::kilobytes_label(self.size)
    }

    /// Upload date as `YYYY-MM-DD`.
    pub fn created_label(&self) -> String {
        dates::timestamp_label(&self.created_at)
    }
}

/// Body of `GET /list-weather-files`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<FileMetadata>,
}

/// Body of a successful `POST /store-weather-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    pub file: String,
}

/// Coordinates and date range sent to the store endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for WeatherQuery {
    /// Central Tokyo, first five days of 2024.
    fn default() -> Self {
        Self {
            latitude: 35.68,
            longitude: 139.75,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap_or_default(),
        }
    }
}

/// The four inputs of the query form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Latitude,
    Longitude,
    StartDate,
    EndDate,
}

impl QueryField {
    pub const ALL: [QueryField; 4] = [
        QueryField::Latitude,
        QueryField::Longitude,
        QueryField::StartDate,
        QueryField::EndDate,
    ];

    /// Form control name, matching the JSON key sent to the backend.
    pub fn name(&self) -> &'static str {
        match self {
            QueryField::Latitude => "latitude",
            QueryField::Longitude => "longitude",
            QueryField::StartDate => "start_date",
            QueryField::EndDate => "end_date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryField::Latitude => "Latitude",
            QueryField::Longitude => "Longitude",
            QueryField::StartDate => "Start Date",
            QueryField::EndDate => "End Date",
        }
    }

    /// HTML input type used for the field.
    pub fn input_type(&self) -> &'static str {
        match self {
            QueryField::Latitude | QueryField::Longitude => "number",
            QueryField::StartDate | QueryField::EndDate => "date",
        }
    }
}

/// Raw text of the query form, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryForm {
    pub latitude: String,
    pub longitude: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self::from(&WeatherQuery::default())
    }
}

impl From<&WeatherQuery> for QueryForm {
    fn from(query: &WeatherQuery) -> Self {
        Self {
            latitude: query.latitude.to_string(),
            longitude: query.longitude.to_string(),
            start_date: dates::format_date(&query.start_date),
            end_date: dates::format_date(&query.end_date),
        }
    }
}

impl QueryForm {
    pub fn value(&self, field: QueryField) -> &str {
        match field {
            QueryField::Latitude => &self.latitude,
            QueryField::Longitude => &self.longitude,
            QueryField::StartDate => &self.start_date,
            QueryField::EndDate => &self.end_date,
        }
    }

    pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
        let slot = match field {
            QueryField::Latitude => &mut self.latitude,
            QueryField::Longitude => &mut self.longitude,
            QueryField::StartDate => &mut self.start_date,
            QueryField::EndDate => &mut self.end_date,
        };
        *slot = value.into();
    }

    /// Convert the typed values into a query. Ranges are left to the backend.
    pub fn to_query(&self) -> Result<WeatherQuery, FormError> {
        Ok(WeatherQuery {
            latitude: self.number(QueryField::Latitude)?,
            longitude: self.number(QueryField::Longitude)?,
            start_date: self.date(QueryField::StartDate)?,
            end_date: self.date(QueryField::EndDate)?,
        })
    }

    fn number(&self, field: QueryField) -> Result<f64, FormError> {
        let raw = self.value(field);
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field: field.label(),
                value: raw.to_string(),
            })
    }

    fn date(&self, field: QueryField) -> Result<NaiveDate, FormError> {
        let raw = self.value(field);
        dates::parse_date(raw).map_err(|_| FormError::InvalidDate {
            field: field.label(),
            value: raw.to_string(),
        })
    }
}

/// Units reported for each daily series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyUnits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_2m_max: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_2m_min: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apparent_temperature_max: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apparent_temperature_min: String,
}

/// Date-indexed parallel arrays. Lengths are expected to match `time`
/// but are not guaranteed to. A `null` date is kept as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default, deserialize_with = "null_entries_as_empty")]
    pub time: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apparent_temperature_max: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apparent_temperature_min: Vec<Option<f64>>,
}

/// Content of one stored weather file (an Open-Meteo archive response).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherData {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(default)]
    pub daily_units: Option<DailyUnits>,
    #[serde(default)]
    pub daily: Option<DailySeries>,
}
