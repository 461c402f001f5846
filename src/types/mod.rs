pub mod clouds;
pub mod condition;
pub mod coord;
pub mod history_type;
pub mod main;
pub mod precipitation;
pub mod sampled;
pub mod wind;
