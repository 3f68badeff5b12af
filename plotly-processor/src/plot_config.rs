use serde::{Deserialize, Serialize};

/// Third argument of `Plotly.newPlot`: chart chrome, not data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            display_mode_bar: false,
            responsive: true,
        }
    }
}
