pub mod histogram;
pub mod measurement;
pub mod percentile;
pub mod time_graph;
