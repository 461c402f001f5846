use serde::Deserialize;

/// Temperature, pressure and humidity snapshot from a report's `main`
/// object. Every field may be missing from the wire format; a missing key
/// deserializes to `None`, never to a zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Main {
    /// Temperature in Kelvin.
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    /// Atmospheric pressure in hPa.
    #[serde(default)]
    pub pressure: Option<f64>,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
}
