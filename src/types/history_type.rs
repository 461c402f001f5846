use std::fmt;

/// Sampling frequency of a weather history request.
///
/// `Tick` history returns raw station measurements; `Hour` and `Day`
/// return statistically sampled aggregates. A type string the server
/// sends that this crate does not recognize parses to
/// [`HistoryType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryType {
    Tick,
    Hour,
    Day,
    Unknown,
}

impl HistoryType {
    /// Case-insensitive parse of the envelope's `type` field.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(match value.to_ascii_uppercase().as_str() {
            "TICK" => HistoryType::Tick,
            "HOUR" => HistoryType::Hour,
            "DAY" => HistoryType::Day,
            _ => HistoryType::Unknown,
        })
    }

    /// The value used for the `type` request parameter.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            HistoryType::Tick => "tick",
            HistoryType::Hour => "hour",
            HistoryType::Day => "day",
            HistoryType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HistoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(HistoryType::parse("TICK"), Some(HistoryType::Tick));
        assert_eq!(HistoryType::parse("hour"), Some(HistoryType::Hour));
        assert_eq!(HistoryType::parse(" Day "), Some(HistoryType::Day));
    }

    #[test]
    fn unrecognized_maps_to_unknown() {
        assert_eq!(HistoryType::parse("week"), Some(HistoryType::Unknown));
    }

    #[test]
    fn empty_is_absent() {
        assert_eq!(HistoryType::parse(""), None);
        assert_eq!(HistoryType::parse("   "), None);
    }
}
