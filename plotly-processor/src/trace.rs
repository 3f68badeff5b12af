use crate::line::Line;
use crate::marker::Marker;
use crate::series::SeriesData;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Bar,
    Scatter,
    Histogram,
}

/// One named series of a figure, serialized with Plotly's attribute names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub x: SeriesData,
    pub y: SeriesData,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histfunc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectgaps: Option<bool>,
    // omitted means Plotly's default, which is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Trace {
    pub fn new(name: &str, trace_type: TraceType, x: SeriesData, y: SeriesData) -> Self {
        Trace {
            name: name.to_owned(),
            x,
            y,
            trace_type,
            mode: None,
            text: None,
            marker: None,
            line: None,
            histfunc: None,
            opacity: None,
            connectgaps: None,
            visible: None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visible == Some(false)
    }
}
