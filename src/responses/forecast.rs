use crate::reports::forecast::ForecastReport;
use crate::responses::envelope::{map_reports, RawEnvelope, ResponseMeta};
use crate::responses::error::ParseError;
use crate::types::coord::GeoCoord;
use serde::Deserialize;

/// The city a forecast was produced for.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct City {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub coord: Option<GeoCoord>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dt_calc: Option<i64>,
    #[serde(default)]
    pub stations_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
}

/// Envelope returned by the forecast endpoints: forecast metadata plus
/// one [`ForecastReport`] per forecast step.
#[derive(Debug, Clone, Default)]
pub struct WeatherForecastResponse {
    pub meta: ResponseMeta,
    pub url: Option<String>,
    pub city: Option<City>,
    pub units: Option<String>,
    pub model: Option<String>,
    pub sys: Option<Sys>,
    pub forecasts: Vec<ForecastReport>,
}

#[derive(Debug, Default, Deserialize)]
struct RawForecast {
    #[serde(flatten)]
    envelope: RawEnvelope,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    city: Option<City>,
    #[serde(default)]
    units: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    sys: Option<Sys>,
}

impl WeatherForecastResponse {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let mut raw: RawForecast = serde_json::from_str(body)?;
        let forecasts = map_reports(std::mem::take(&mut raw.envelope.list), "forecast report");
        Ok(Self {
            meta: raw.envelope.into_meta(),
            url: raw.url,
            city: raw.city,
            units: raw.units,
            model: raw.model,
            sys: raw.sys,
            forecasts,
        })
    }

    pub fn has_forecasts(&self) -> bool {
        !self.forecasts.is_empty()
    }
}
