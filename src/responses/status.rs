use crate::reports::station::StationReport;
use crate::responses::envelope::{map_reports, RawEnvelope, ResponseMeta};
use crate::responses::error::ParseError;

/// Envelope returned by the current-weather search and lookup
/// endpoints. The `list` holds one station report per matched station
/// or city.
#[derive(Debug, Clone, Default)]
pub struct WeatherStatusResponse {
    pub meta: ResponseMeta,
    pub stations: Vec<StationReport>,
}

impl WeatherStatusResponse {
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let mut raw: RawEnvelope = serde_json::from_str(body)?;
        let stations = map_reports(std::mem::take(&mut raw.list), "station report");
        Ok(Self {
            meta: raw.into_meta(),
            stations,
        })
    }

    pub fn has_stations(&self) -> bool {
        !self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIND_RESPONSE: &str = r#"{
        "cod": "200",
        "calctime": 0.1621,
        "cnt": 8,
        "list": [
            {
                "id": 5106529,
                "name": "Woodbridge",
                "coord": {"lat": 40.557598, "lon": -74.284599},
                "distance": 2.693,
                "main": {"temp": 272.15, "humidity": 56, "pressure": 1025},
                "dt": 1358108276,
                "wind": {"speed": 2.06, "deg": 273},
                "clouds": {"all": 8},
                "weather": [
                    {"id": 800, "main": "Clear", "description": "sky is clear", "icon": "01d"}
                ]
            },
            {
                "id": 5101798,
                "name": "Perth Amboy",
                "coord": {"lat": 40.506762, "lon": -74.265259},
                "main": {"temp": 271.92},
                "dt": 1358108300
            },
            {
                "id": "not-a-number",
                "coord": "broken"
            },
            {"id": 5099133, "name": "Carteret", "dt": 1358108300},
            {"id": 5097627, "name": "Sewaren", "dt": 1358108301},
            {"id": 5099836, "name": "Colonia", "dt": 1358108302},
            {"id": 5098706, "name": "Fords", "dt": 1358108303},
            {"id": 5102443, "name": "Rahway", "dt": 1358108304}
        ]
    }"#;

    #[test]
    fn search_response_maps_each_station() {
        let response = WeatherStatusResponse::from_json(FIND_RESPONSE).unwrap();
        assert_eq!(response.meta.code, Some(200));
        assert!((response.meta.calc_time_total().unwrap() - 0.1621).abs() < 1e-6);
        // One of the eight entries is malformed; the other seven survive.
        assert_eq!(response.stations.len(), 7);
        assert_eq!(response.stations[0].report.name.as_deref(), Some("Woodbridge"));
        assert!((response.stations[0].distance.unwrap() - 2.693).abs() < 1e-6);
        assert_eq!(response.stations[1].report.id, Some(5101798));
        assert_eq!(response.stations[6].report.name.as_deref(), Some("Rahway"));
    }

    #[test]
    fn empty_list_is_a_valid_response() {
        let response =
            WeatherStatusResponse::from_json(r#"{"cod": "404", "message": "not found"}"#).unwrap();
        assert_eq!(response.meta.code, Some(404));
        assert_eq!(response.meta.message.as_deref(), Some("not found"));
        assert!(!response.has_stations());
    }

    #[test]
    fn invalid_json_is_fatal() {
        assert!(WeatherStatusResponse::from_json("not json at all").is_err());
    }
}
