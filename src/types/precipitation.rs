use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Rain or snow amounts from a report's `rain`/`snow` object.
///
/// Stations report a running `today` total plus a sparse set of
/// trailing-hour buckets (`"1h"` through `"24h"`, in mm). Only buckets
/// that are present and numeric end up in the map; malformed bucket
/// values are dropped, not fatal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Precipitation {
    today: Option<f64>,
    hourly: BTreeMap<u8, f64>,
}

impl Precipitation {
    /// Amount accumulated since the start of the day, in mm.
    pub fn today(&self) -> Option<f64> {
        self.today
    }

    /// Amount measured over the trailing `hours` window, in mm.
    pub fn measure(&self, hours: u8) -> Option<f64> {
        self.hourly.get(&hours).copied()
    }

    pub fn has_measures(&self) -> bool {
        !self.hourly.is_empty()
    }

    /// The trailing-hour windows this report carries, ascending.
    pub fn measured_hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.hourly.keys().copied()
    }

    /// Preferred single amount: the most recent 1-hour bucket when
    /// available, the `today` total otherwise.
    pub fn amount(&self) -> Option<f64> {
        self.measure(1).or(self.today)
    }
}

impl<'de> Deserialize<'de> for Precipitation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let today = object.get("today").and_then(Value::as_f64);
        let mut hourly = BTreeMap::new();
        for hours in 1..=24u8 {
            if let Some(amount) = object.get(&format!("{hours}h")).and_then(Value::as_f64) {
                hourly.insert(hours, amount);
            }
        }
        Ok(Precipitation { today, hourly })
    }
}
