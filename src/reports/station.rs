use crate::reports::reading::WeatherReading;
use crate::reports::weather::WeatherReport;
use crate::responses::error::ParseError;
use serde::Deserialize;

/// A current-weather report from a station or city endpoint.
///
/// The station flavor layers a web URL, the distance to the query point
/// and station metadata on top of the base report, with the wire object
/// flattened across both structs.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StationReport {
    #[serde(flatten)]
    pub report: WeatherReport,
    /// Link to the station's page on the OWM site.
    #[serde(default)]
    pub url: Option<String>,
    /// Distance from the queried point, in km.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub station: Option<StationInfo>,
}

/// Station metadata attached to single-station reports.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StationInfo {
    /// Map zoom level the station is shown at.
    #[serde(default)]
    pub zoom: Option<i64>,
}

impl StationReport {
    /// Parses a single-report response document, as returned by the
    /// `/weather/city/{id}` and `/weather/station/{id}` endpoints.
    ///
    /// Fails only when `body` is not valid JSON; missing fields are
    /// tolerated per the usual mapping rules.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(body)?)
    }
}

impl WeatherReading for StationReport {
    fn temperature(&self) -> Option<f64> {
        self.report.temperature()
    }

    fn humidity(&self) -> Option<f64> {
        self.report.humidity()
    }

    fn pressure(&self) -> Option<f64> {
        self.report.pressure()
    }

    fn wind_speed(&self) -> Option<f64> {
        self.report.wind_speed()
    }

    fn wind_gust(&self) -> Option<f64> {
        self.report.wind_gust()
    }

    fn wind_deg(&self) -> Option<i64> {
        self.report.wind_deg()
    }

    fn rain(&self) -> Option<f64> {
        self.report.rain()
    }

    fn snow(&self) -> Option<f64> {
        self.report.snow()
    }
}
