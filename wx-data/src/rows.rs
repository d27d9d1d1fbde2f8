//! Chart/table rows derived from a file's daily series.

use crate::models::RawWeatherData;
use serde::Serialize;

/// One day of temperatures, ready for the D3 chart and the table.
///
/// Serialized with camelCase keys (`tempMax`, `apparentMin`, ...) because
/// that is what `renderTemperatureChart` reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub date: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub apparent_max: f64,
    pub apparent_min: f64,
    pub unit: String,
}

/// Value at `index`, or 0 when the series is short, the entry is null or not finite.
fn value_at(series: &[Option<f64>], index: usize) -> f64 {
    series
        .get(index)
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Build one row per entry of `daily.time`.
///
/// The `time` array drives the row count; the other series are read by index
/// and may be shorter, longer or absent. A `null` date yields a row with an
/// empty date, which the chart skips and the table shows blank.
pub fn chart_rows(data: &RawWeatherData) -> Vec<ChartRow> {
    let Some(daily) = data.daily.as_ref() else {
        return Vec::new();
    };
    let unit = data
        .daily_units
        .as_ref()
        .map(|u| u.temperature_2m_max.clone())
        .unwrap_or_default();

    daily
        .time
        .iter()
        .enumerate()
        .map(|(index, date)| ChartRow {
            date: date.clone(),
            temp_max: value_at(&daily.temperature_2m_max, index),
            temp_min: value_at(&daily.temperature_2m_min, index),
            apparent_max: value_at(&daily.apparent_temperature_max, index),
            apparent_min: value_at(&daily.apparent_temperature_min, index),
            unit: unit.clone(),
        })
        .collect()
}
