use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A scalar reported together with its sample statistics.
///
/// Historical hourly/daily endpoints wrap each numeric field in a
/// `{"v": .., "c": .., "mi": .., "ma": ..}` envelope instead of sending a
/// bare number. Every component may independently be missing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SampledValue<T> {
    /// The sampled value itself.
    #[serde(rename = "v", default)]
    pub value: Option<T>,
    /// Number of measurements in the sampling window.
    #[serde(rename = "c", default)]
    pub count: Option<i64>,
    /// Minimum over the sampling window.
    #[serde(rename = "mi", default)]
    pub min: Option<T>,
    /// Maximum over the sampling window.
    #[serde(rename = "ma", default)]
    pub max: Option<T>,
}

impl<T: Copy> SampledValue<T> {
    /// The value of a sample that may itself be absent.
    pub fn value_of(sampled: Option<&Self>) -> Option<T> {
        sampled.and_then(|s| s.value)
    }
}

/// Sampled counterpart of [`crate::Main`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SampledMain {
    #[serde(default)]
    pub temp: Option<SampledValue<f64>>,
    #[serde(default)]
    pub temp_min: Option<SampledValue<f64>>,
    #[serde(default)]
    pub temp_max: Option<SampledValue<f64>>,
    #[serde(default)]
    pub pressure: Option<SampledValue<f64>>,
    #[serde(default)]
    pub humidity: Option<SampledValue<f64>>,
}

/// Sampled counterpart of [`crate::Wind`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SampledWind {
    #[serde(default)]
    pub speed: Option<SampledValue<f64>>,
    #[serde(default)]
    pub deg: Option<SampledValue<i64>>,
    #[serde(default)]
    pub gust: Option<SampledValue<f64>>,
    #[serde(default)]
    pub var_beg: Option<SampledValue<i64>>,
    #[serde(default)]
    pub var_end: Option<SampledValue<i64>>,
}

/// Sampled counterpart of [`crate::Precipitation`]: the same `today` total
/// and trailing-hour buckets, every bucket a [`SampledValue`]. Buckets
/// that fail to parse as a sample envelope are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledPrecipitation {
    today: Option<f64>,
    hourly: BTreeMap<u8, SampledValue<f64>>,
}

impl SampledPrecipitation {
    pub fn today(&self) -> Option<f64> {
        self.today
    }

    pub fn measure(&self, hours: u8) -> Option<&SampledValue<f64>> {
        self.hourly.get(&hours)
    }

    pub fn has_measures(&self) -> bool {
        !self.hourly.is_empty()
    }

    pub fn measured_hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.hourly.keys().copied()
    }

    /// Preferred single amount: the 1-hour sample's value when available,
    /// the `today` total otherwise.
    pub fn amount(&self) -> Option<f64> {
        SampledValue::value_of(self.measure(1)).or(self.today)
    }
}

impl<'de> Deserialize<'de> for SampledPrecipitation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let today = object.get("today").and_then(Value::as_f64);
        let mut hourly = BTreeMap::new();
        for hours in 1..=24u8 {
            if let Some(bucket) = object.get(&format!("{hours}h")) {
                if let Ok(sample) = serde_json::from_value::<SampledValue<f64>>(bucket.clone()) {
                    hourly.insert(hours, sample);
                }
            }
        }
        Ok(SampledPrecipitation { today, hourly })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sample_envelope() {
        let sample: SampledValue<f64> =
            serde_json::from_str(r#"{"v": 285.4, "c": 12, "mi": 281.0, "ma": 289.9}"#).unwrap();
        assert!((sample.value.unwrap() - 285.4).abs() < 1e-4);
        assert_eq!(sample.count, Some(12));
        assert!((sample.min.unwrap() - 281.0).abs() < 1e-4);
        assert!((sample.max.unwrap() - 289.9).abs() < 1e-4);
    }

    #[test]
    fn sample_components_are_independently_optional() {
        let sample: SampledValue<f64> = serde_json::from_str(r#"{"v": 1.5}"#).unwrap();
        assert_eq!(sample.value, Some(1.5));
        assert_eq!(sample.count, None);
        assert_eq!(sample.min, None);
        assert_eq!(sample.max, None);

        let sample: SampledValue<i64> = serde_json::from_str(r#"{"c": 3}"#).unwrap();
        assert_eq!(sample.value, None);
        assert_eq!(sample.count, Some(3));
    }

    #[test]
    fn value_of_collapses_absence() {
        let sample: SampledValue<f64> = serde_json::from_str(r#"{"v": 2.0}"#).unwrap();
        assert_eq!(SampledValue::value_of(Some(&sample)), Some(2.0));
        let empty: SampledValue<f64> = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(SampledValue::value_of(Some(&empty)), None);
        assert_eq!(SampledValue::<f64>::value_of(None), None);
    }

    #[test]
    fn sampled_main_parses_nested_envelopes() {
        let main: SampledMain = serde_json::from_str(
            r#"{"temp": {"v": 276.6, "c": 24}, "humidity": {"v": 98.0}}"#,
        )
        .unwrap();
        assert_eq!(SampledValue::value_of(main.temp.as_ref()), Some(276.6));
        assert_eq!(main.temp.unwrap().count, Some(24));
        assert_eq!(SampledValue::value_of(main.humidity.as_ref()), Some(98.0));
        assert!(main.pressure.is_none());
    }

    #[test]
    fn sampled_precipitation_buckets() {
        let rain: SampledPrecipitation = serde_json::from_str(
            r#"{"1h": {"v": 0.5, "c": 4}, "24h": {"v": 3.0}, "today": 3}"#,
        )
        .unwrap();
        assert_eq!(rain.measure(1).unwrap().value, Some(0.5));
        assert_eq!(rain.measure(24).unwrap().value, Some(3.0));
        assert_eq!(rain.today(), Some(3.0));
        assert_eq!(rain.amount(), Some(0.5));
    }

    #[test]
    fn sampled_precipitation_falls_back_to_today() {
        let rain: SampledPrecipitation =
            serde_json::from_str(r#"{"3h": {"v": 1.0}, "today": 4}"#).unwrap();
        assert_eq!(rain.amount(), Some(4.0));
    }

    #[test]
    fn malformed_sample_bucket_is_dropped() {
        let rain: SampledPrecipitation =
            serde_json::from_str(r#"{"1h": 7, "2h": {"v": 1.0}}"#).unwrap();
        assert!(rain.measure(1).is_none());
        assert_eq!(rain.measure(2).unwrap().value, Some(1.0));
    }
}
