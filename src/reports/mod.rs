pub mod forecast;
pub mod reading;
pub mod sampled;
pub mod station;
pub mod weather;
