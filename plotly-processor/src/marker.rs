use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i8>,
}

impl Marker {
    pub fn colored(color: &str) -> Self {
        Marker { color: Some(color.to_owned()), size: None }
    }
}
