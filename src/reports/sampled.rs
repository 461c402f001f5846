use crate::reports::reading::WeatherReading;
use crate::types::sampled::{SampledMain, SampledPrecipitation, SampledValue, SampledWind};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One historical aggregate from an hourly or daily station history.
///
/// Each scalar comes wrapped in a sample envelope, and temperature,
/// pressure and humidity can appear in two places: as top-level sampled
/// scalars and nested inside `main`. The derived accessors prefer the
/// top-level scalar and only then fall back to `main`: the order
/// matters and is easy to invert, so it is spelled out once in
/// [`prefer`].
///
/// [`prefer`]: SampledReport::prefer
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SampledReport {
    /// Measurement window instant, epoch seconds UTC.
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub temp: Option<SampledValue<f64>>,
    #[serde(default)]
    pub pressure: Option<SampledValue<f64>>,
    #[serde(default)]
    pub humidity: Option<SampledValue<f64>>,
    #[serde(default)]
    pub main: Option<SampledMain>,
    #[serde(default)]
    pub wind: Option<SampledWind>,
    #[serde(default)]
    pub rain: Option<SampledPrecipitation>,
    #[serde(default)]
    pub snow: Option<SampledPrecipitation>,
    /// Combined precipitation sample, wire shape `{"precipitation": {"v": {..}}}`.
    #[serde(default)]
    pub precipitation: Option<PrecipitationSample>,
}

/// Wrapper for the `precipitation` key's inner `v` sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct PrecipitationSample {
    #[serde(default)]
    pub v: Option<SampledValue<f64>>,
}

impl SampledReport {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Top-level sample first, nested `main` sample second.
    fn prefer(
        &self,
        top: Option<&SampledValue<f64>>,
        from_main: impl Fn(&SampledMain) -> Option<&SampledValue<f64>>,
    ) -> Option<f64> {
        SampledValue::value_of(top)
            .or_else(|| SampledValue::value_of(self.main.as_ref().and_then(|m| from_main(m))))
    }

    /// The sampled temperature envelope backing [`WeatherReading::temperature`].
    pub fn sampled_temp(&self) -> Option<&SampledValue<f64>> {
        self.temp
            .as_ref()
            .or_else(|| self.main.as_ref().and_then(|m| m.temp.as_ref()))
    }
}

impl WeatherReading for SampledReport {
    fn temperature(&self) -> Option<f64> {
        self.prefer(self.temp.as_ref(), |m| m.temp.as_ref())
    }

    fn humidity(&self) -> Option<f64> {
        self.prefer(self.humidity.as_ref(), |m| m.humidity.as_ref())
    }

    fn pressure(&self) -> Option<f64> {
        self.prefer(self.pressure.as_ref(), |m| m.pressure.as_ref())
    }

    fn wind_speed(&self) -> Option<f64> {
        SampledValue::value_of(self.wind.as_ref().and_then(|w| w.speed.as_ref()))
    }

    fn wind_gust(&self) -> Option<f64> {
        SampledValue::value_of(self.wind.as_ref().and_then(|w| w.gust.as_ref()))
    }

    fn wind_deg(&self) -> Option<i64> {
        SampledValue::value_of(self.wind.as_ref().and_then(|w| w.deg.as_ref()))
    }

    fn rain(&self) -> Option<f64> {
        self.rain.as_ref().and_then(SampledPrecipitation::amount)
    }

    fn snow(&self) -> Option<f64> {
        self.snow.as_ref().and_then(SampledPrecipitation::amount)
    }

    /// Prefers the dedicated combined-precipitation sample; falls back to
    /// summing rain and snow with the usual absent-as-zero rule.
    fn precipitation(&self) -> Option<f64> {
        if let Some(value) = self
            .precipitation
            .as_ref()
            .and_then(|p| SampledValue::value_of(p.v.as_ref()))
        {
            return Some(value);
        }
        match (self.rain(), self.snow()) {
            (None, None) => None,
            (rain, snow) => Some(rain.unwrap_or(0.0) + snow.unwrap_or(0.0)),
        }
    }
}
