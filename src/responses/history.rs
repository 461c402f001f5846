use crate::reports::sampled::SampledReport;
use crate::reports::weather::WeatherReport;
use crate::responses::envelope::{map_reports, RawEnvelope, ResponseMeta};
use crate::responses::error::ParseError;
use crate::types::history_type::HistoryType;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Envelope returned by the city history endpoint. City history is
/// always a list of plain measurements.
#[derive(Debug, Clone, Default)]
pub struct WeatherHistoryCityResponse {
    pub meta: ResponseMeta,
    pub city_id: Option<i64>,
    pub history: Vec<WeatherReport>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCityHistory {
    #[serde(flatten)]
    envelope: RawEnvelope,
    #[serde(default)]
    city_id: Option<i64>,
}

impl WeatherHistoryCityResponse {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let mut raw: RawCityHistory = serde_json::from_str(body)?;
        let history = map_reports(std::mem::take(&mut raw.envelope.list), "city history entry");
        Ok(Self {
            meta: raw.envelope.into_meta(),
            city_id: raw.city_id,
            history,
        })
    }

    /// Time the server spent locating the city, from the calc-time
    /// breakdown.
    pub fn calc_time_find(&self) -> Option<f64> {
        self.calc_time_component("find")
    }

    /// Time the server spent fetching the measurements.
    pub fn calc_time_fetch(&self) -> Option<f64> {
        self.calc_time_component("fetch")
    }

    fn calc_time_component(&self, key: &str) -> Option<f64> {
        self.meta.calc_time.as_ref().and_then(|c| c.component(key))
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

/// History entries of a station response, shaped by the granularity the
/// server answered with.
#[derive(Debug, Clone, Default)]
pub enum StationHistory {
    /// Raw per-measurement readings (`type=tick`).
    Tick(Vec<WeatherReport>),
    /// Hourly or daily aggregates.
    Sampled(Vec<SampledReport>),
    /// The server reported a granularity this client does not know; the
    /// entries are kept unparsed.
    #[default]
    Unrecognized,
}

impl StationHistory {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Tick(list) => list.is_empty(),
            Self::Sampled(list) => list.is_empty(),
            Self::Unrecognized => true,
        }
    }
}

/// Envelope returned by the station history endpoint. The `type` field
/// decides whether the list holds raw ticks or aggregated samples.
#[derive(Debug, Clone, Default)]
pub struct WeatherHistoryStationResponse {
    pub meta: ResponseMeta,
    pub station_id: Option<i64>,
    pub history_type: Option<HistoryType>,
    pub history: StationHistory,
}

#[derive(Debug, Default, Deserialize)]
struct RawStationHistory {
    #[serde(flatten)]
    envelope: RawEnvelope,
    #[serde(default)]
    station_id: Option<i64>,
    #[serde(default, rename = "type")]
    history_type: Option<String>,
}

impl WeatherHistoryStationResponse {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let mut raw: RawStationHistory = serde_json::from_str(body)?;
        let history_type = raw.history_type.as_deref().and_then(HistoryType::parse);
        let list = std::mem::take(&mut raw.envelope.list);
        let history = Self::dispatch(history_type, list);
        Ok(Self {
            meta: raw.envelope.into_meta(),
            station_id: raw.station_id,
            history_type,
            history,
        })
    }

    // A response without a `type` field still gets its entries parsed
    // as plain readings; only a type string this crate does not
    // recognize leaves them unparsed.
    fn dispatch(history_type: Option<HistoryType>, list: Vec<Value>) -> StationHistory {
        match history_type {
            Some(HistoryType::Tick) | None => {
                StationHistory::Tick(map_reports(list, "station tick entry"))
            }
            Some(HistoryType::Hour) | Some(HistoryType::Day) => {
                StationHistory::Sampled(map_reports(list, "station sample entry"))
            }
            Some(HistoryType::Unknown) => {
                if !list.is_empty() {
                    debug!("leaving {} history entries unparsed: unrecognized type", list.len());
                }
                StationHistory::Unrecognized
            }
        }
    }

    /// Per-tick server time, from the calc-time breakdown.
    pub fn calc_time_tick(&self) -> Option<f64> {
        self.meta.calc_time.as_ref().and_then(|c| c.component("tick"))
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}
