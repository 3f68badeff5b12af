pub mod builders;
pub mod charts;
pub mod figure;
pub mod layout;
pub mod line;
pub mod marker;
pub mod options;
pub mod payloads;
pub mod plot_config;
pub mod series;
pub mod trace;

pub use charts::histogram::build_histogram;
pub use charts::measurement::build_measurement_graph;
pub use charts::percentile::build_percentile_graph;
pub use charts::time_graph::build_time_graph;
pub use figure::Figure;
pub use options::{DisplayOptions, PlotToggles};
