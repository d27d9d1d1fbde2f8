//! The backend endpoints, each described as an [`Operation`].
//!
//! Endpoint paths follow the backend shipped with the dashboard:
//! `GET /list-weather-files`, `POST /store-weather-data`,
//! `GET /weather-file-content/{file}`.

use crate::payload::{decode_payload, error_detail};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use wx_data::{FetchError, FileList, FileMetadata, RawWeatherData, StoredFile, WeatherQuery};

pub const LIST_FILES_SEGMENT: &str = "list-weather-files";
pub const STORE_DATA_SEGMENT: &str = "store-weather-data";
pub const FILE_CONTENT_SEGMENT: &str = "weather-file-content";

/// Method, path and optional JSON body of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path segments appended to the base URL; each is percent-encoded on its own.
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn get(segments: &[&str]) -> Self {
        Self {
            method: Method::GET,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            body: None,
        }
    }

    pub fn post(segments: &[&str], body: Value) -> Self {
        Self {
            method: Method::POST,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            body: Some(body),
        }
    }

    /// Absolute URL of the request under `base_url`.
    pub fn url(&self, base_url: &str) -> Result<Url, String> {
        let mut url =
            Url::parse(base_url).map_err(|e| format!("invalid base URL {base_url:?}: {e}"))?;
        url.path_segments_mut()
            .map_err(|_| format!("base URL {base_url:?} cannot carry a path"))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

/// A request description plus the mapping from its decoded payload to a result.
pub trait Operation {
    type Output;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn request(&self) -> RequestSpec;

    /// Shown when an error response carries no usable `detail`.
    fn fallback_detail(&self) -> &'static str;

    fn map(&self, payload: Value) -> Result<Self::Output, FetchError>;
}

fn from_payload<T: DeserializeOwned>(payload: Value) -> Result<T, FetchError> {
    serde_json::from_value(payload)
        .map_err(|e| FetchError::corrupt(format!("unexpected payload shape: {e}")))
}

/// Turn a status code and raw body into the operation's result.
pub fn interpret<O: Operation + ?Sized>(
    op: &O,
    status: StatusCode,
    body: &str,
) -> Result<O::Output, FetchError> {
    if !status.is_success() {
        let detail = decode_payload(body)
            .ok()
            .as_ref()
            .and_then(error_detail)
            .unwrap_or_else(|| op.fallback_detail().to_string());
        return Err(FetchError::Backend {
            status: status.as_u16(),
            detail,
        });
    }
    op.map(decode_payload(body)?)
}

/// `GET /list-weather-files`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFiles;

impl Operation for ListFiles {
    type Output = Vec<FileMetadata>;

    fn name(&self) -> &'static str {
        "list files"
    }

    fn request(&self) -> RequestSpec {
        RequestSpec::get(&[LIST_FILES_SEGMENT])
    }

    fn fallback_detail(&self) -> &'static str {
        "Unknown API Error"
    }

    fn map(&self, payload: Value) -> Result<Self::Output, FetchError> {
        Ok(from_payload::<FileList>(payload)?.files)
    }
}

/// `POST /store-weather-data`; yields the stored file's name.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreWeather(pub WeatherQuery);

impl Operation for StoreWeather {
    type Output = String;

    fn name(&self) -> &'static str {
        "store weather data"
    }

    fn request(&self) -> RequestSpec {
        // A struct of plain numbers and dates always serializes
        let body = serde_json::to_value(&self.0).unwrap_or(Value::Null);
        RequestSpec::post(&[STORE_DATA_SEGMENT], body)
    }

    fn fallback_detail(&self) -> &'static str {
        "Unknown Error"
    }

    fn map(&self, payload: Value) -> Result<Self::Output, FetchError> {
        Ok(from_payload::<StoredFile>(payload)?.file)
    }
}

/// `GET /weather-file-content/{file}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent(pub String);

impl Operation for FileContent {
    type Output = RawWeatherData;

    fn name(&self) -> &'static str {
        "file content"
    }

    fn request(&self) -> RequestSpec {
        RequestSpec::get(&[FILE_CONTENT_SEGMENT, self.0.as_str()])
    }

    fn fallback_detail(&self) -> &'static str {
        "Failed to retrieve file content."
    }

    fn map(&self, payload: Value) -> Result<Self::Output, FetchError> {
        from_payload(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    const BASE: &str = "http://127.0.0.1:8000";

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    fn tokyo_query() -> WeatherQuery {
        WeatherQuery {
            latitude: 35.68,
            longitude: 139.75,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[test]
    fn test_request_urls() {
        assert_eq!(
            ListFiles.request().url(BASE).unwrap().as_str(),
            "http://127.0.0.1:8000/list-weather-files"
        );
        assert_eq!(
            StoreWeather(tokyo_query()).request().url(BASE).unwrap().as_str(),
            "http://127.0.0.1:8000/store-weather-data"
        );
        assert_eq!(
            FileContent("weather_35.68_139.75.json".to_string())
                .request()
                .url("https://example.org/api")
                .unwrap()
                .as_str(),
            "https://example.org/api/weather-file-content/weather_35.68_139.75.json"
        );
    }

    #[test]
    fn test_file_name_is_one_encoded_segment() {
        let url = FileContent("my file/../x.json".to_string())
            .request()
            .url(BASE)
            .unwrap();
        assert_eq!(url.path(), "/weather-file-content/my%20file%2F..%2Fx.json");
    }

    #[test]
    fn test_bad_base_url() {
        assert!(ListFiles.request().url("not a url").is_err());
        assert!(ListFiles.request().url("mailto:someone@example.org").is_err());
    }

    #[test]
    fn test_store_request_body() {
        let spec = StoreWeather(tokyo_query()).request();
        assert_eq!(spec.method, Method::POST);
        assert_eq!(
            spec.body,
            Some(json!({
                "latitude": 35.68,
                "longitude": 139.75,
                "start_date": "2024-01-01",
                "end_date": "2024-01-05",
            }))
        );
        assert_eq!(ListFiles.request().body, None);
        assert_eq!(ListFiles.request().method, Method::GET);
    }

    #[test]
    fn test_store_success_echoes_file() {
        let body = r#"{"status": "ok", "file": "35.68_139.75_2024-01-01_2024-01-05.json"}"#;
        let file = interpret(&StoreWeather(tokyo_query()), status(200), body).unwrap();
        assert_eq!(file, "35.68_139.75_2024-01-01_2024-01-05.json");
    }

    #[test]
    fn test_store_validation_error_detail() {
        let body = r#"{"detail": "Validation Error: Date range must not exceed 31 days."}"#;
        let err = interpret(&StoreWeather(tokyo_query()), status(400), body).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "Validation Error: Date range must not exceed 31 days."
        );
    }

    #[test]
    fn test_list_empty_is_not_an_error() {
        let files = interpret(&ListFiles, status(200), r#"{"files": []}"#).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_files() {
        let body = json!({
            "files": [
                { "name": "a.json", "size": 2048, "created_at": "2024-03-09T17:45:02+00:00" },
                { "name": "b.json", "size": 512, "created_at": "2024-03-10T08:00:00+00:00" },
            ]
        })
        .to_string();
        let files = interpret(&ListFiles, status(200), &body).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.json");
        assert_eq!(files[1].size_label(), "0.5 KB");
    }

    #[test]
    fn test_error_without_detail_uses_fallback() {
        let err = interpret(&ListFiles, status(500), r#"{"message": "boom"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unknown API Error");

        let err =
            interpret(&StoreWeather(tokyo_query()), status(502), "Bad Gateway").unwrap_err();
        assert_eq!(err.to_string(), "Unknown Error");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_content_not_found() {
        let op = FileContent("missing.json".to_string());

        let err = interpret(&op, status(404), r#"{"detail": "not found"}"#).unwrap_err();
        assert_eq!(
            err,
            FetchError::Backend {
                status: 404,
                detail: "not found".to_string()
            }
        );

        let err = interpret(
            &op,
            status(404),
            r#"{"detail": {"status": "error", "message": "not found"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "not found");

        let err = interpret(&op, status(500), "").unwrap_err();
        assert_eq!(err.to_string(), "Failed to retrieve file content.");
    }

    #[test]
    fn test_content_double_encoded() {
        let inner = json!({
            "latitude": 35.7,
            "longitude": 139.75,
            "timezone": "Asia/Tokyo",
            "daily_units": { "temperature_2m_max": "°C" },
            "daily": {
                "time": ["2024-01-01", "2024-01-02"],
                "temperature_2m_max": [9.1, 10.4],
                "temperature_2m_min": [1.2, 2.0],
                "apparent_temperature_max": [6.0, 7.5],
                "apparent_temperature_min": [-2.0, -1.1],
            }
        })
        .to_string();
        let double = serde_json::to_string(&inner).unwrap();
        let op = FileContent("a.json".to_string());

        let once = interpret(&op, status(200), &inner).unwrap();
        let twice = interpret(&op, status(200), &double).unwrap();
        assert_eq!(once, twice);
        assert_eq!(wx_data::chart_rows(&twice).len(), 2);
    }

    #[test]
    fn test_content_corrupt() {
        let op = FileContent("a.json".to_string());
        let err = interpret(&op, status(200), r#""{\"daily\": [1, 2""#).unwrap_err();
        assert!(matches!(err, FetchError::Corrupt { .. }));
        assert!(err.to_string().starts_with("Data corruption error"));
    }

    #[test]
    fn test_content_with_null_date_still_loads() {
        let op = FileContent("a.json".to_string());
        let body = r#"{"daily":{"time":["2024-01-01",null],"temperature_2m_max":[1,2]}}"#;
        let data = interpret(&op, status(200), body).unwrap();
        let rows = wx_data::chart_rows(&data);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].date, "");
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let err = interpret(&ListFiles, status(304), "").unwrap_err();
        assert_eq!(err.status(), Some(304));
        assert_eq!(err.to_string(), "Unknown API Error");
    }

    #[test]
    fn test_shape_mismatch_is_corruption() {
        let err = interpret(&ListFiles, status(200), r#"{"files": "a.json"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Corrupt { .. }));

        let err = interpret(&StoreWeather(tokyo_query()), status(200), r#"{"status": "ok"}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Corrupt { .. }));
    }
}
