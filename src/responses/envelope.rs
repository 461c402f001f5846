use crate::responses::calc_time::CalcTime;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response metadata shared by every envelope: status code, message and
/// server calc-time. Composed into each response type rather than
/// inherited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseMeta {
    /// HTTP-ish status code from the `cod` field, which the server sends
    /// as either a number or a string.
    pub code: Option<i64>,
    pub message: Option<String>,
    pub calc_time: Option<CalcTime>,
}

impl ResponseMeta {
    /// Total server processing time in seconds, when reported.
    pub fn calc_time_total(&self) -> Option<f64> {
        self.calc_time.as_ref().and_then(CalcTime::total)
    }
}

/// The wire shape common to all envelopes. Response modules flatten this
/// next to their own fields and convert with [`RawEnvelope::into_meta`].
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default, deserialize_with = "status_code")]
    cod: Option<i64>,
    #[serde(default, deserialize_with = "message_text")]
    message: Option<String>,
    #[serde(default, deserialize_with = "calc_time")]
    calctime: Option<CalcTime>,
    #[serde(default)]
    pub(crate) list: Vec<Value>,
}

impl RawEnvelope {
    pub(crate) fn into_meta(self) -> ResponseMeta {
        ResponseMeta {
            code: self.cod,
            message: self.message.filter(|m| !m.is_empty()),
            calc_time: self.calctime,
        }
    }
}

/// `cod` arrives as `200` or `"200"` depending on the endpoint; anything
/// else is treated as absent.
fn status_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// `message` usually carries error text, but the forecast endpoints put
/// the query cost in it as a float. Keep the float's textual form.
fn message_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// `calctime` arrives as a float or as a semi-structured string.
fn calc_time<'de, D>(deserializer: D) -> Result<Option<CalcTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().map(CalcTime::from_total),
        Value::String(s) => Some(CalcTime::parse(&s)),
        _ => None,
    })
}

/// Maps the elements of an envelope's `list` array individually.
///
/// One malformed element is logged and skipped; the rest of the batch
/// still parses. Partial success is the expected outcome for a batch of
/// heterogeneous weather stations.
pub(crate) fn map_reports<T: DeserializeOwned>(list: Vec<Value>, what: &str) -> Vec<T> {
    list.into_iter()
        .filter_map(|element| match serde_json::from_value(element) {
            Ok(report) => Some(report),
            Err(err) => {
                warn!("skipping malformed {what} entry: {err}");
                None
            }
        })
        .collect()
}
