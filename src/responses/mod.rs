pub mod calc_time;
pub mod envelope;
pub mod error;
pub mod forecast;
pub mod history;
pub mod status;
