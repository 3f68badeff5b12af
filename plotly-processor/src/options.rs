use serde::{Deserialize, Serialize};

fn shown() -> bool {
    true
}

/// Which trace groups start visible: `{ "plots": { "sleep": true, "diapers": false, "meals": true } }`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    #[serde(default)]
    pub plots: PlotToggles,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotToggles {
    #[serde(default = "shown")]
    pub sleep: bool,
    #[serde(default = "shown")]
    pub diapers: bool,
    #[serde(default = "shown")]
    pub meals: bool,
}

impl Default for PlotToggles {
    fn default() -> Self {
        PlotToggles { sleep: true, diapers: true, meals: true }
    }
}

impl DisplayOptions {
    pub fn new(sleep: bool, diapers: bool, meals: bool) -> Self {
        DisplayOptions { plots: PlotToggles { sleep, diapers, meals } }
    }
}

/// `visible` attribute for a trace gated by `toggle`; `None` without options.
pub(crate) fn visibility(options: Option<&DisplayOptions>, toggle: fn(&PlotToggles) -> bool) -> Option<bool> {
    options.map(|options| toggle(&options.plots))
}
