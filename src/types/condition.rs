use serde::{Deserialize, Deserializer};

/// One entry of a report's `weather` array.
///
/// The numeric `id` is mapped to [`ConditionCode`] at parse time; codes the
/// server adds after this crate was compiled come back as
/// [`ConditionCode::Unknown`] rather than an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherCondition {
    #[serde(
        rename = "id",
        default = "ConditionCode::unknown",
        deserialize_with = "condition_code"
    )]
    pub code: ConditionCode,
    /// Group name, e.g. "Clouds".
    #[serde(default)]
    pub main: Option<String>,
    /// Free-text detail, e.g. "scattered clouds".
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name, e.g. "03d".
    #[serde(default)]
    pub icon: Option<String>,
}

fn condition_code<'de, D>(deserializer: D) -> Result<ConditionCode, D::Error>
where
    D: Deserializer<'de>,
{
    let id = i64::deserialize(deserializer)?;
    Ok(ConditionCode::from_id(id))
}

/// The closed set of OWM weather condition codes.
///
/// See <https://openweathermap.org/weather-conditions> for the official
/// definitions. Convert a wire code with [`ConditionCode::from_id`]; every
/// unassigned code maps to [`ConditionCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCode {
    Unknown,
    // Thunderstorm
    ThunderstormWithLightRain,
    ThunderstormWithRain,
    ThunderstormWithHeavyRain,
    LightThunderstorm,
    Thunderstorm,
    HeavyThunderstorm,
    RaggedThunderstorm,
    ThunderstormWithLightDrizzle,
    ThunderstormWithDrizzle,
    ThunderstormWithHeavyDrizzle,
    // Drizzle
    LightIntensityDrizzle,
    Drizzle,
    HeavyIntensityDrizzle,
    LightIntensityDrizzleRain,
    DrizzleRain,
    HeavyIntensityDrizzleRain,
    ShowerDrizzle,
    // Rain
    LightRain,
    ModerateRain,
    HeavyIntensityRain,
    VeryHeavyRain,
    ExtremeRain,
    FreezingRain,
    LightIntensityShowerRain,
    ShowerRain,
    HeavyIntensityShowerRain,
    // Snow
    LightSnow,
    Snow,
    HeavySnow,
    Sleet,
    ShowerSnow,
    // Atmosphere
    Mist,
    Smoke,
    Haze,
    SandOrDustWhirls,
    Fog,
    // Clouds
    SkyIsClear,
    FewClouds,
    ScatteredClouds,
    BrokenClouds,
    OvercastClouds,
    // Extreme
    Tornado,
    TropicalStorm,
    Hurricane,
    Cold,
    Hot,
    Windy,
    Hail,
}

impl ConditionCode {
    /// Maps a wire condition code to its variant; unassigned codes map to
    /// [`ConditionCode::Unknown`].
    pub fn from_id(id: i64) -> Self {
        match id {
            200 => ConditionCode::ThunderstormWithLightRain,
            201 => ConditionCode::ThunderstormWithRain,
            202 => ConditionCode::ThunderstormWithHeavyRain,
            210 => ConditionCode::LightThunderstorm,
            211 => ConditionCode::Thunderstorm,
            212 => ConditionCode::HeavyThunderstorm,
            221 => ConditionCode::RaggedThunderstorm,
            230 => ConditionCode::ThunderstormWithLightDrizzle,
            231 => ConditionCode::ThunderstormWithDrizzle,
            232 => ConditionCode::ThunderstormWithHeavyDrizzle,
            300 => ConditionCode::LightIntensityDrizzle,
            301 => ConditionCode::Drizzle,
            302 => ConditionCode::HeavyIntensityDrizzle,
            310 => ConditionCode::LightIntensityDrizzleRain,
            311 => ConditionCode::DrizzleRain,
            312 => ConditionCode::HeavyIntensityDrizzleRain,
            321 => ConditionCode::ShowerDrizzle,
            500 => ConditionCode::LightRain,
            501 => ConditionCode::ModerateRain,
            502 => ConditionCode::HeavyIntensityRain,
            503 => ConditionCode::VeryHeavyRain,
            504 => ConditionCode::ExtremeRain,
            511 => ConditionCode::FreezingRain,
            520 => ConditionCode::LightIntensityShowerRain,
            521 => ConditionCode::ShowerRain,
            522 => ConditionCode::HeavyIntensityShowerRain,
            600 => ConditionCode::LightSnow,
            601 => ConditionCode::Snow,
            602 => ConditionCode::HeavySnow,
            611 => ConditionCode::Sleet,
            621 => ConditionCode::ShowerSnow,
            701 => ConditionCode::Mist,
            711 => ConditionCode::Smoke,
            721 => ConditionCode::Haze,
            731 => ConditionCode::SandOrDustWhirls,
            741 => ConditionCode::Fog,
            800 => ConditionCode::SkyIsClear,
            801 => ConditionCode::FewClouds,
            802 => ConditionCode::ScatteredClouds,
            803 => ConditionCode::BrokenClouds,
            804 => ConditionCode::OvercastClouds,
            900 => ConditionCode::Tornado,
            901 => ConditionCode::TropicalStorm,
            902 => ConditionCode::Hurricane,
            903 => ConditionCode::Cold,
            904 => ConditionCode::Hot,
            905 => ConditionCode::Windy,
            906 => ConditionCode::Hail,
            _ => ConditionCode::Unknown,
        }
    }

    /// The wire code for this variant, `None` for [`ConditionCode::Unknown`].
    pub fn id(&self) -> Option<i64> {
        match self {
            ConditionCode::Unknown => None,
            ConditionCode::ThunderstormWithLightRain => Some(200),
            ConditionCode::ThunderstormWithRain => Some(201),
            ConditionCode::ThunderstormWithHeavyRain => Some(202),
            ConditionCode::LightThunderstorm => Some(210),
            ConditionCode::Thunderstorm => Some(211),
            ConditionCode::HeavyThunderstorm => Some(212),
            ConditionCode::RaggedThunderstorm => Some(221),
            ConditionCode::ThunderstormWithLightDrizzle => Some(230),
            ConditionCode::ThunderstormWithDrizzle => Some(231),
            ConditionCode::ThunderstormWithHeavyDrizzle => Some(232),
            ConditionCode::LightIntensityDrizzle => Some(300),
            ConditionCode::Drizzle => Some(301),
            ConditionCode::HeavyIntensityDrizzle => Some(302),
            ConditionCode::LightIntensityDrizzleRain => Some(310),
            ConditionCode::DrizzleRain => Some(311),
            ConditionCode::HeavyIntensityDrizzleRain => Some(312),
            ConditionCode::ShowerDrizzle => Some(321),
            ConditionCode::LightRain => Some(500),
            ConditionCode::ModerateRain => Some(501),
            ConditionCode::HeavyIntensityRain => Some(502),
            ConditionCode::VeryHeavyRain => Some(503),
            ConditionCode::ExtremeRain => Some(504),
            ConditionCode::FreezingRain => Some(511),
            ConditionCode::LightIntensityShowerRain => Some(520),
            ConditionCode::ShowerRain => Some(521),
            ConditionCode::HeavyIntensityShowerRain => Some(522),
            ConditionCode::LightSnow => Some(600),
            ConditionCode::Snow => Some(601),
            ConditionCode::HeavySnow => Some(602),
            ConditionCode::Sleet => Some(611),
            ConditionCode::ShowerSnow => Some(621),
            ConditionCode::Mist => Some(701),
            ConditionCode::Smoke => Some(711),
            ConditionCode::Haze => Some(721),
            ConditionCode::SandOrDustWhirls => Some(731),
            ConditionCode::Fog => Some(741),
            ConditionCode::SkyIsClear => Some(800),
            ConditionCode::FewClouds => Some(801),
            ConditionCode::ScatteredClouds => Some(802),
            ConditionCode::BrokenClouds => Some(803),
            ConditionCode::OvercastClouds => Some(804),
            ConditionCode::Tornado => Some(900),
            ConditionCode::TropicalStorm => Some(901),
            ConditionCode::Hurricane => Some(902),
            ConditionCode::Cold => Some(903),
            ConditionCode::Hot => Some(904),
            ConditionCode::Windy => Some(905),
            ConditionCode::Hail => Some(906),
        }
    }

    fn unknown() -> Self {
        ConditionCode::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_maps_to_variant() {
        assert_eq!(ConditionCode::from_id(802), ConditionCode::ScatteredClouds);
        assert_eq!(ConditionCode::from_id(800), ConditionCode::SkyIsClear);
        assert_eq!(ConditionCode::from_id(906), ConditionCode::Hail);
    }

    #[test]
    fn unassigned_code_maps_to_unknown() {
        assert_eq!(ConditionCode::from_id(805), ConditionCode::Unknown);
        assert_eq!(ConditionCode::from_id(-1), ConditionCode::Unknown);
        assert_eq!(ConditionCode::from_id(0), ConditionCode::Unknown);
    }

    #[test]
    fn id_round_trips_for_known_codes() {
        for id in [200, 321, 511, 621, 741, 804, 906] {
            assert_eq!(ConditionCode::from_id(id).id(), Some(id));
        }
        assert_eq!(ConditionCode::Unknown.id(), None);
    }

    #[test]
    fn parses_weather_array_entry() {
        let condition: WeatherCondition = serde_json::from_str(
            r#"{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}"#,
        )
        .unwrap();
        assert_eq!(condition.code, ConditionCode::ScatteredClouds);
        assert_eq!(condition.main.as_deref(), Some("Clouds"));
        assert_eq!(condition.description.as_deref(), Some("scattered clouds"));
        assert_eq!(condition.icon.as_deref(), Some("03d"));
    }

    #[test]
    fn entry_without_id_is_unknown() {
        let condition: WeatherCondition =
            serde_json::from_str(r#"{"main": "Haze"}"#).unwrap();
        assert_eq!(condition.code, ConditionCode::Unknown);
        assert_eq!(condition.main.as_deref(), Some("Haze"));
    }
}
