use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>
}

impl Line {
    /// Thin spline, the only line style the charts use; dash and colour vary.
    pub fn spline(dash: &str, color: &str) -> Self {
        Line {
            dash: Some(dash.to_owned()),
            shape: Some("spline".to_owned()),
            width: Some(1),
            color: Some(color.to_owned()),
        }
    }
}
