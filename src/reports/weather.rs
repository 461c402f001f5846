use crate::reports::reading::WeatherReading;
use crate::types::clouds::Clouds;
use crate::types::condition::WeatherCondition;
use crate::types::coord::GeoCoord;
use crate::types::main::Main;
use crate::types::precipitation::Precipitation;
use crate::types::wind::Wind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One weather observation or forecast instant for one location.
///
/// This is the base report shape shared by every endpoint; all
/// sub-objects are optional and a report with nothing but a timestamp is
/// valid. The [`WeatherReading`] impl derives single values from
/// whichever sub-objects are present.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WeatherReport {
    /// OWM city or station identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// City or station name.
    #[serde(default)]
    pub name: Option<String>,
    /// Measurement instant, epoch seconds UTC.
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub coord: Option<GeoCoord>,
    #[serde(default)]
    pub main: Option<Main>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default, deserialize_with = "clouds_field")]
    pub clouds: Option<Clouds>,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
    /// Categorical conditions from the `weather` array.
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// `clouds` is only meaningful as an object or an array; any other JSON
/// shape at that key reads as absent rather than failing the report.
fn clouds_field<'de, D>(deserializer: D) -> Result<Option<Clouds>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) | Value::Array(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

impl WeatherReport {
    /// The measurement instant as a [`DateTime`], when `dt` is present
    /// and within chrono's representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

impl WeatherReading for WeatherReport {
    fn temperature(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.temp)
    }

    fn humidity(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.humidity)
    }

    fn pressure(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.pressure)
    }

    fn wind_speed(&self) -> Option<f64> {
        self.wind.as_ref().and_then(|w| w.speed)
    }

    fn wind_gust(&self) -> Option<f64> {
        self.wind.as_ref().and_then(|w| w.gust)
    }

    fn wind_deg(&self) -> Option<i64> {
        self.wind.as_ref().and_then(|w| w.deg)
    }

    fn rain(&self) -> Option<f64> {
        self.rain.as_ref().and_then(Precipitation::amount)
    }

    fn snow(&self) -> Option<f64> {
        self.snow.as_ref().and_then(Precipitation::amount)
    }
}
