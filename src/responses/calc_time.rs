use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static CALC_TIME_COMPONENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*=\s*([\d.]*)").expect("failed to compile calc-time component regex")
});

/// Server-side processing-time metadata from an envelope's `calctime`
/// field.
///
/// The server reports this in two formats: a bare float (the total) or a
/// semi-structured `"find = 0.0131 fetch = 0.0056 total=0.0186"` list of
/// named components. Both parse into the same type; garbage parses into
/// an empty `CalcTime` rather than an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalcTime {
    total: Option<f64>,
    components: HashMap<String, f64>,
}

impl CalcTime {
    /// Parses a `calctime` string. Tries the whole string as one float
    /// first; otherwise extracts `key = value` components, taking the
    /// `total` component as the total.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return CalcTime::default();
        }
        if let Ok(total) = raw.parse::<f64>() {
            return CalcTime {
                total: Some(total),
                components: HashMap::new(),
            };
        }
        let mut components = HashMap::new();
        for capture in CALC_TIME_COMPONENT_RE.captures_iter(raw) {
            if let Ok(value) = capture[2].parse::<f64>() {
                components.insert(capture[1].to_string(), value);
            }
        }
        let total = components.get("total").copied();
        CalcTime { total, components }
    }

    /// A calc-time that was sent as a bare number on the wire.
    pub fn from_total(total: f64) -> Self {
        CalcTime {
            total: Some(total),
            components: HashMap::new(),
        }
    }

    /// The total processing time in seconds, when reported.
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    /// A named timing component (`"find"`, `"fetch"`, `"tick"`, ...).
    ///
    /// When the server sent a bare number instead of named components,
    /// that number answers every component request, since a bare
    /// calc-time is all total.
    pub fn component(&self, key: &str) -> Option<f64> {
        if self.components.is_empty() {
            return self.total;
        }
        self.components.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALC_TIME: &str = "find = 0.0131 fetch = 0.0056 total=0.0186";

    #[test]
    fn extracts_named_components() {
        let calc = CalcTime::parse(CALC_TIME);
        assert!((calc.component("find").unwrap() - 0.0131).abs() < 1e-5);
        assert!((calc.component("fetch").unwrap() - 0.0056).abs() < 1e-5);
        assert!((calc.component("total").unwrap() - 0.0186).abs() < 1e-5);
        assert!((calc.total().unwrap() - 0.0186).abs() < 1e-5);
    }

    #[test]
    fn bare_float_answers_any_component() {
        let calc = CalcTime::parse("0.0186");
        assert!((calc.total().unwrap() - 0.0186).abs() < 1e-5);
        assert!((calc.component("total").unwrap() - 0.0186).abs() < 1e-5);
        assert!((calc.component("tick").unwrap() - 0.0186).abs() < 1e-5);
    }

    #[test]
    fn missing_component_is_absent() {
        let calc = CalcTime::parse(CALC_TIME);
        assert_eq!(calc.component("tick"), None);
    }

    #[test]
    fn garbage_is_absent_not_an_error() {
        let calc = CalcTime::parse("fast enough");
        assert_eq!(calc.total(), None);
        assert_eq!(calc.component("total"), None);

        let calc = CalcTime::parse("");
        assert_eq!(calc.total(), None);
    }

    #[test]
    fn unparseable_component_value_is_skipped() {
        let calc = CalcTime::parse("find = . total = 0.5");
        assert_eq!(calc.component("find"), None);
        assert!((calc.component("total").unwrap() - 0.5).abs() < 1e-9);
    }
}
