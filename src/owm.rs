//! The main entry point for talking to the OpenWeatherMap JSON API.
//!
//! [`OwmClient`] wraps the HTTP transport and exposes one method per
//! endpoint: current weather by point, city, bounding box, circle, id
//! or name, plus forecast and history lookups.

use crate::error::OwmError;
use crate::reports::station::StationReport;
use crate::responses::forecast::WeatherForecastResponse;
use crate::responses::history::{WeatherHistoryCityResponse, WeatherHistoryStationResponse};
use crate::responses::status::WeatherStatusResponse;
use crate::transport::HttpTransport;
use crate::types::history_type::HistoryType;
use bon::bon;
use reqwest::Url;

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.1";

/// Client for the OpenWeatherMap v2.1 JSON API.
///
/// Construct it with the builder; every option has a default except the
/// API key, which the server only requires for some endpoints.
///
/// ```no_run
/// # use owm::{OwmClient, OwmError};
/// # async fn run() -> Result<(), OwmError> {
/// let client = OwmClient::builder().api_key("my-api-key").build()?;
/// let nearby = client.current_around_point(55.5, 37.5, 10).await?;
/// for station in &nearby.stations {
///     println!("{:?}", station.report.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OwmClient {
    base_url: Url,
    transport: HttpTransport,
}

#[bon]
impl OwmClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(&str)`: sent as the `x-api-key` header when present.
    /// * `.base_url(&str)`: overrides the production API root, mainly
    ///   for tests against a local server.
    /// * `.retries(u32)`: attempts per request before giving up.
    ///
    /// # Errors
    ///
    /// Returns [`OwmError::BaseUrl`] if the base URL does not parse.
    #[builder(on(String, into))]
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        retries: Option<u32>,
    ) -> Result<Self, OwmError> {
        let base = base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base.trim_end_matches('/'))
            .map_err(|e| OwmError::BaseUrl(base.to_string(), e))?;
        Ok(Self {
            base_url,
            transport: HttpTransport::new(api_key, retries),
        })
    }

    /// Current weather from the stations around a geographic point.
    /// `cnt` caps how many stations the server returns.
    pub async fn current_around_point(
        &self,
        lat: f64,
        lon: f64,
        cnt: u32,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let url = self.endpoint(
            &["find", "station"],
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("cnt", cnt.to_string()),
            ],
        );
        self.get_status(url).await
    }

    /// Current weather for the cities around a geographic point.
    pub async fn current_at_city_coord(
        &self,
        lat: f64,
        lon: f64,
        cnt: u32,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let url = self.endpoint(
            &["find", "city"],
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("cnt", cnt.to_string()),
            ],
        );
        self.get_status(url).await
    }

    /// Current weather from the stations inside a bounding box.
    pub async fn current_in_bounding_box(
        &self,
        north_lat: f64,
        west_lon: f64,
        south_lat: f64,
        east_lon: f64,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let bbox = Self::bbox(north_lat, west_lon, south_lat, east_lon);
        let url = self.endpoint(&["find", "station"], &[("bbox", bbox)]);
        self.get_status(url).await
    }

    /// Current weather for the cities inside a bounding box.
    pub async fn current_at_city_bounding_box(
        &self,
        north_lat: f64,
        west_lon: f64,
        south_lat: f64,
        east_lon: f64,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let bbox = Self::bbox(north_lat, west_lon, south_lat, east_lon);
        let url = self.endpoint(&["find", "city"], &[("bbox", bbox)]);
        self.get_status(url).await
    }

    /// Current weather from the stations inside a circle, with the
    /// radius in kilometres.
    pub async fn current_in_circle(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let url = self.endpoint(
            &["find", "station"],
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("radius", radius_km.to_string()),
            ],
        );
        self.get_status(url).await
    }

    /// Current weather for the cities inside a circle, with the radius
    /// in kilometres.
    pub async fn current_at_city_circle(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let url = self.endpoint(
            &["find", "city"],
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("radius", radius_km.to_string()),
            ],
        );
        self.get_status(url).await
    }

    /// Current weather of a single city, by its OWM city id.
    pub async fn current_at_city_id(&self, city_id: u64) -> Result<StationReport, OwmError> {
        let url = self.endpoint(&["weather", "city", &city_id.to_string()], &[]);
        let body = self.transport.get(url.as_str()).await?;
        Ok(StationReport::from_json(&body)?)
    }

    /// Current weather of a single station, by its OWM station id.
    pub async fn current_at_station_id(&self, station_id: u64) -> Result<StationReport, OwmError> {
        let url = self.endpoint(&["weather", "station", &station_id.to_string()], &[]);
        let body = self.transport.get(url.as_str()).await?;
        Ok(StationReport::from_json(&body)?)
    }

    /// Current weather of the cities matching a name.
    pub async fn current_at_city_name(
        &self,
        city_name: &str,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let url = self.endpoint(&["find", "name"], &[("q", city_name.to_string())]);
        self.get_status(url).await
    }

    /// Current weather of the cities matching a name within a country,
    /// given as a two-letter country code.
    pub async fn current_at_city_name_and_country(
        &self,
        city_name: &str,
        country_code: &str,
    ) -> Result<WeatherStatusResponse, OwmError> {
        let query = format!("{city_name},{country_code}");
        let url = self.endpoint(&["find", "name"], &[("q", query)]);
        self.get_status(url).await
    }

    /// Weather forecast for a city, by its OWM city id.
    pub async fn forecast_at_city_id(
        &self,
        city_id: u64,
    ) -> Result<WeatherForecastResponse, OwmError> {
        let url = self.endpoint(&["forecast", "city", &city_id.to_string()], &[]);
        let body = self.transport.get(url.as_str()).await?;
        Ok(WeatherForecastResponse::from_json(&body)?)
    }

    /// Weather forecast for a city, by name.
    pub async fn forecast_at_city_name(
        &self,
        city_name: &str,
    ) -> Result<WeatherForecastResponse, OwmError> {
        let url = self.endpoint(&["forecast", "city"], &[("q", city_name.to_string())]);
        let body = self.transport.get(url.as_str()).await?;
        Ok(WeatherForecastResponse::from_json(&body)?)
    }

    /// Weather history of a city at the requested granularity.
    pub async fn history_at_city(
        &self,
        city_id: u64,
        history_type: HistoryType,
    ) -> Result<WeatherHistoryCityResponse, OwmError> {
        let url = self.endpoint(
            &["history", "city", &city_id.to_string()],
            &[("type", history_type.as_query_param().to_string())],
        );
        let body = self.transport.get(url.as_str()).await?;
        Ok(WeatherHistoryCityResponse::from_json(&body)?)
    }

    /// Weather history of a station at the requested granularity.
    pub async fn history_at_station(
        &self,
        station_id: u64,
        history_type: HistoryType,
    ) -> Result<WeatherHistoryStationResponse, OwmError> {
        let url = self.endpoint(
            &["history", "station", &station_id.to_string()],
            &[("type", history_type.as_query_param().to_string())],
        );
        let body = self.transport.get(url.as_str()).await?;
        Ok(WeatherHistoryStationResponse::from_json(&body)?)
    }

    async fn get_status(&self, url: Url) -> Result<WeatherStatusResponse, OwmError> {
        let body = self.transport.get(url.as_str()).await?;
        Ok(WeatherStatusResponse::from_json(&body)?)
    }

    /// Builds an endpoint URL from path segments and query parameters.
    /// The segments are appended to whatever path the base URL carries,
    /// and the parameters are percent-encoded by the URL type.
    fn endpoint(&self, segments: &[&str], params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k, v.as_str())));
        }
        url
    }

    fn bbox(north_lat: f64, west_lon: f64, south_lat: f64, east_lon: f64) -> String {
        format!("{north_lat},{west_lon},{south_lat},{east_lon}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OwmClient {
        OwmClient::builder().build().unwrap()
    }

    #[test]
    fn default_base_url_is_the_production_api() {
        let client = client();
        let url = client.endpoint(&["find", "station"], &[("cnt", "10".to_string())]);
        assert_eq!(
            url.as_str(),
            "http://api.openweathermap.org/data/2.1/find/station?cnt=10"
        );
    }

    #[test]
    fn base_url_override_keeps_its_path() {
        let client = OwmClient::builder()
            .base_url("http://localhost:8080/owm/")
            .build()
            .unwrap();
        let url = client.endpoint(&["weather", "city", "5106529"], &[]);
        assert_eq!(url.as_str(), "http://localhost:8080/owm/weather/city/5106529");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = OwmClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(OwmError::BaseUrl(..))));
    }

    #[test]
    fn city_names_are_percent_encoded() {
        let client = client();
        let url = client.endpoint(&["find", "name"], &[("q", "São Paulo,BR".to_string())]);
        assert_eq!(
            url.as_str(),
            "http://api.openweathermap.org/data/2.1/find/name?q=S%C3%A3o+Paulo%2CBR"
        );
    }

    #[test]
    fn bbox_joins_corners_in_request_order() {
        assert_eq!(OwmClient::bbox(12.0, -5.5, 10.0, -3.0), "12,-5.5,10,-3");
    }

    #[test]
    fn history_type_becomes_the_type_parameter() {
        let client = client();
        let url = client.endpoint(
            &["history", "station", "5091"],
            &[("type", HistoryType::Hour.as_query_param().to_string())],
        );
        assert_eq!(
            url.as_str(),
            "http://api.openweathermap.org/data/2.1/history/station/5091?type=hour"
        );
    }
}
