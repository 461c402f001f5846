/// Derived accessors shared by every report variant.
///
/// Plain reports back these with bare scalars, historical reports with
/// sampled scalars; callers read both through the same surface. Every
/// accessor tolerates partial data: a missing sub-object or field yields
/// `None`, never a panic or an error.
pub trait WeatherReading {
    /// Temperature in Kelvin.
    fn temperature(&self) -> Option<f64>;

    /// Relative humidity in percent.
    fn humidity(&self) -> Option<f64>;

    /// Atmospheric pressure in hPa.
    fn pressure(&self) -> Option<f64>;

    /// Average wind speed in m/s.
    fn wind_speed(&self) -> Option<f64>;

    /// Wind gust speed in m/s.
    fn wind_gust(&self) -> Option<f64>;

    /// Average wind direction in degrees.
    fn wind_deg(&self) -> Option<i64>;

    /// Rain amount in mm: the trailing 1-hour bucket when present, the
    /// daily total otherwise.
    fn rain(&self) -> Option<f64>;

    /// Snow amount in mm, with the same bucket-then-total preference.
    fn snow(&self) -> Option<f64>;

    /// Combined rain and snow. An absent summand contributes zero, so
    /// absent rain plus measured snow is the snow amount; only when both
    /// are absent is the combination absent.
    fn precipitation(&self) -> Option<f64> {
        match (self.rain(), self.snow()) {
            (None, None) => None,
            (rain, snow) => Some(rain.unwrap_or(0.0) + snow.unwrap_or(0.0)),
        }
    }
}
