use crate::reports::reading::WeatherReading;
use crate::reports::weather::WeatherReport;
use serde::Deserialize;

/// One forecast instant from a `/forecast/city` response.
///
/// The v2.1 wire format carries a single `dt` key per forecast entry that
/// doubles as the forecast-calculation instant, so [`calc_dt`] reads the
/// same field as the base report's timestamp. Kept as the API behaves,
/// not as one might wish it behaved.
///
/// [`calc_dt`]: ForecastReport::calc_dt
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ForecastReport {
    #[serde(flatten)]
    pub report: WeatherReport,
}

impl ForecastReport {
    /// Instant the forecast was calculated for, epoch seconds UTC.
    pub fn calc_dt(&self) -> Option<i64> {
        self.report.dt
    }
}

impl WeatherReading for ForecastReport {
    fn temperature(&self) -> Option<f64> {
        self.report.temperature()
    }

    fn humidity(&self) -> Option<f64> {
        self.report.humidity()
    }

    fn pressure(&self) -> Option<f64> {
        self.report.pressure()
    }

    fn wind_speed(&self) -> Option<f64> {
        self.report.wind_speed()
    }

    fn wind_gust(&self) -> Option<f64> {
        self.report.wind_gust()
    }

    fn wind_deg(&self) -> Option<i64> {
        self.report.wind_deg()
    }

    fn rain(&self) -> Option<f64> {
        self.report.rain()
    }

    fn snow(&self) -> Option<f64> {
        self.report.snow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_dt_mirrors_the_report_timestamp() {
        let forecast: ForecastReport = serde_json::from_str(
            r#"{"dt": 1359979200, "main": {"temp": 271.2}}"#,
        )
        .unwrap();
        assert_eq!(forecast.report.dt, Some(1359979200));
        assert_eq!(forecast.calc_dt(), Some(1359979200));
        assert_eq!(forecast.temperature(), Some(271.2));
    }
}
