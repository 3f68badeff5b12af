pub mod html_renderer;

use slogger_plotly_processor::Figure;
use std::{fmt, io};

#[derive(Debug)]
pub enum RenderError {
    Io(io::Error),
    Serde(serde_json::Error),
    InvalidElement(String),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serde(err)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Serde(e) => write!(f, "Serialization error: {}", e),
            RenderError::InvalidElement(element) => write!(f, "Invalid element id: {:?}", element),
        }
    }
}

impl std::error::Error for RenderError {}

/// Draws a figure into the container named `element`, replacing whatever
/// chart was bound to it before.
pub trait Renderer: Send + Sync {
    fn new_plot(&self, element: &str, figure: &Figure) -> Result<(), RenderError>;
}
