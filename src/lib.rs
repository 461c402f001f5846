//! Client library for the OpenWeatherMap v2.1 JSON API.
//!
//! The entry point is [`OwmClient`]: one async method per endpoint,
//! returning typed response envelopes. The mapping layer is tolerant by
//! design. A field the server omits becomes `None`, an enum value this
//! crate does not know becomes an `Unknown` variant, and a malformed
//! element in a result list is logged and skipped rather than failing
//! the whole response. Parsing fails only when the body is not valid
//! JSON at all.
//!
//! ```no_run
//! use owm::{HistoryType, OwmClient, OwmError};
//!
//! # async fn run() -> Result<(), OwmError> {
//! let client = OwmClient::builder().api_key("my-api-key").build()?;
//!
//! let current = client.current_at_city_name("Dublin").await?;
//! for station in &current.stations {
//!     println!("{:?}: {:?} K", station.report.name, station.report.main);
//! }
//!
//! let history = client.history_at_station(5091, HistoryType::Hour).await?;
//! if history.has_history() {
//!     println!("history type: {:?}", history.history_type);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod owm;
mod reports;
mod responses;
mod transport;
mod types;

pub use error::OwmError;
pub use owm::*;

pub use reports::forecast::ForecastReport;
pub use reports::reading::WeatherReading;
pub use reports::sampled::{PrecipitationSample, SampledReport};
pub use reports::station::{StationInfo, StationReport};
pub use reports::weather::WeatherReport;

pub use types::clouds::{CloudDescription, Clouds, Cumulus, SkyCondition};
pub use types::condition::{ConditionCode, WeatherCondition};
pub use types::coord::GeoCoord;
pub use types::history_type::HistoryType;
pub use types::main::Main;
pub use types::precipitation::Precipitation;
pub use types::sampled::{SampledMain, SampledPrecipitation, SampledValue, SampledWind};
pub use types::wind::Wind;

pub use responses::calc_time::CalcTime;
pub use responses::envelope::ResponseMeta;
pub use responses::forecast::{City, Sys, WeatherForecastResponse};
pub use responses::history::{
    StationHistory, WeatherHistoryCityResponse, WeatherHistoryStationResponse,
};
pub use responses::status::WeatherStatusResponse;

pub use responses::error::ParseError;
pub use transport::error::TransportError;
