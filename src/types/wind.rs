use serde::Deserialize;

/// Wind observation from a report's `wind` object.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Wind {
    /// Average wind speed in m/s.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Average wind direction in degrees.
    #[serde(default)]
    pub deg: Option<i64>,
    /// Gust speed in m/s.
    #[serde(default)]
    pub gust: Option<f64>,
    /// Start of the variable-direction arc, in degrees.
    #[serde(default)]
    pub var_beg: Option<i64>,
    /// End of the variable-direction arc, in degrees.
    #[serde(default)]
    pub var_end: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typical_observation() {
        let wind: Wind = serde_json::from_str(r#"{"speed": 3.1, "deg": 260}"#).unwrap();
        assert!((wind.speed.unwrap() - 3.1).abs() < 1e-4);
        assert_eq!(wind.deg, Some(260));
        assert_eq!(wind.gust, None);
        assert_eq!(wind.var_beg, None);
        assert_eq!(wind.var_end, None);
    }

    #[test]
    fn parses_variable_direction_arc() {
        let wind: Wind =
            serde_json::from_str(r#"{"speed": 7, "deg": 340, "var_beg": 300, "var_end": 20}"#)
                .unwrap();
        assert_eq!(wind.var_beg, Some(300));
        assert_eq!(wind.var_end, Some(20));
    }
}
