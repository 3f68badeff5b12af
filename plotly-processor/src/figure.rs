use crate::layout::Layout;
use crate::plot_config::PlotConfig;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};

/// Everything `Plotly.newPlot(element, data, layout, config)` needs besides the element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Figure {
            data,
            layout,
            config: PlotConfig::default(),
        }
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.data.iter().find(|trace| trace.name == name)
    }
}
