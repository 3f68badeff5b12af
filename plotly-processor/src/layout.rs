use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout shared by most charts: numeric y labels and a titled x axis.
    pub fn with_x_title(title: &str) -> Self {
        Layout {
            xaxis: Some(Axis::titled(title)),
            yaxis: Some(Axis::tick_labels(true)),
            barmode: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotick: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
}

impl Axis {
    pub fn tick_labels(show: bool) -> Self {
        Axis { showticklabels: Some(show), ..Default::default() }
    }

    pub fn titled(text: &str) -> Self {
        Axis { title: Some(Title { text: text.to_owned() }), ..Default::default() }
    }

    /// Ticks every `dtick` units starting at `tick0`, with Plotly's automatic ticking off.
    pub fn fixed_ticks(tick0: f64, dtick: f64) -> Self {
        Axis { autotick: Some(false), tick0: Some(tick0), dtick: Some(dtick), ..Default::default() }
    }
}
