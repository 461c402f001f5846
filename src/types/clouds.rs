use serde::Deserialize;

/// Cloud coverage, which the OWM API reports in two mutually exclusive
/// shapes depending on the endpoint: city endpoints send an object with an
/// `all` percentage, metar-style station endpoints send an array of layer
/// descriptions. The untagged enum picks the arm from the JSON shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Clouds {
    Coverage {
        /// Total cloud coverage in percent.
        #[serde(default)]
        all: Option<i64>,
    },
    Conditions(Vec<CloudDescription>),
}

impl Clouds {
    /// Coverage percentage, when the report used the object shape.
    pub fn all(&self) -> Option<i64> {
        match self {
            Clouds::Coverage { all } => *all,
            Clouds::Conditions(_) => None,
        }
    }

    /// Per-layer descriptions, when the report used the array shape.
    pub fn conditions(&self) -> &[CloudDescription] {
        match self {
            Clouds::Coverage { .. } => &[],
            Clouds::Conditions(conditions) => conditions,
        }
    }

    pub fn has_conditions(&self) -> bool {
        matches!(self, Clouds::Conditions(_))
    }
}

/// One cloud layer from the array shape of [`Clouds`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CloudDescription {
    /// Layer base distance in feet.
    #[serde(default)]
    pub distance: Option<i64>,
    #[serde(default)]
    pub condition: Option<SkyCondition>,
    #[serde(default)]
    pub cumulus: Option<Cumulus>,
}

/// Metar sky-condition contraction. Strings the server may add later map
/// to [`SkyCondition::Unknown`] instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkyCondition {
    /// Few clouds [12.5%, 25%].
    Few,
    /// Scattered clouds [37.5%, 50%].
    Sct,
    /// Broken sky [62%, 87.5%].
    Bkn,
    /// Overcast {100%}.
    Ovc,
    /// Vertical visibility.
    Vv,
    #[serde(other)]
    Unknown,
}

/// Cumulus cloud type from metar-style reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cumulus {
    /// Towering cumulus.
    Tcu,
    /// Cumulonimbus.
    Cb,
    /// Altocumulus castellanus.
    Acc,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_shape_yields_coverage() {
        let clouds: Clouds = serde_json::from_str(r#"{"all": 40}"#).unwrap();
        assert_eq!(clouds.all(), Some(40));
        assert!(!clouds.has_conditions());
        assert!(clouds.conditions().is_empty());
    }

    #[test]
    fn object_shape_without_all() {
        let clouds: Clouds = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(clouds.all(), None);
        assert!(!clouds.has_conditions());
    }

    #[test]
    fn array_shape_yields_conditions() {
        let clouds: Clouds = serde_json::from_str(
            r#"[
                {"distance": 91, "condition": "BKN"},
                {"distance": 305, "condition": "OVC", "cumulus": "CB"}
            ]"#,
        )
        .unwrap();
        assert_eq!(clouds.all(), None);
        assert!(clouds.has_conditions());
        let conditions = clouds.conditions();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].distance, Some(91));
        assert_eq!(conditions[0].condition, Some(SkyCondition::Bkn));
        assert_eq!(conditions[0].cumulus, None);
        assert_eq!(conditions[1].condition, Some(SkyCondition::Ovc));
        assert_eq!(conditions[1].cumulus, Some(Cumulus::Cb));
    }

    #[test]
    fn unrecognized_enum_strings_fall_back_to_unknown() {
        let clouds: Clouds = serde_json::from_str(
            r#"[{"distance": 50, "condition": "XYZ", "cumulus": "QQQ"}]"#,
        )
        .unwrap();
        let layer = &clouds.conditions()[0];
        assert_eq!(layer.condition, Some(SkyCondition::Unknown));
        assert_eq!(layer.cumulus, Some(Cumulus::Unknown));
    }
}
