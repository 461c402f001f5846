use serde::Deserialize;

/// A geographic point as reported by OWM.
///
/// Some station reports carry only one of the two components, so latitude
/// and longitude are independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoCoord {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}
