use crate::render::{RenderError, Renderer};
use log::info;
use slogger_plotly_processor::Figure;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Writes every figure as a standalone page `<output_dir>/<element>.html`
/// that draws it with plotly.js.
pub struct HtmlFileRenderer {
    output_dir: PathBuf,
    plotly_src: String,
}

impl HtmlFileRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            plotly_src: PLOTLY_CDN.to_owned(),
        }
    }

    pub fn with_plotly_src(mut self, src: &str) -> Self {
        self.plotly_src = src.to_owned();
        self
    }

    pub fn page_path(&self, element: &str) -> PathBuf {
        self.output_dir.join(format!("{}.html", element))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn check_element(element: &str) -> Result<(), RenderError> {
    let valid = !element.is_empty()
        && element.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RenderError::InvalidElement(element.to_owned()))
    }
}

// keeps "</script>" inside string values from closing the script block
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn render_page(element: &str, figure: &Figure, plotly_src: &str) -> Result<String, RenderError> {
    check_element(element)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{element}</title>
<script src="{plotly_src}"></script>
</head>
<body>
<div id="{element}"></div>
<script>
Plotly.newPlot("{element}", {data}, {layout}, {config});
</script>
</body>
</html>
"#,
        element = element,
        plotly_src = plotly_src,
        data = script_json(&figure.data)?,
        layout = script_json(&figure.layout)?,
        config = script_json(&figure.config)?,
    ))
}

impl Renderer for HtmlFileRenderer {
    fn new_plot(&self, element: &str, figure: &Figure) -> Result<(), RenderError> {
        let page = render_page(element, figure, &self.plotly_src)?;
        fs::create_dir_all(&self.output_dir)?;
        let path = self.page_path(element);
        fs::write(&path, page)?;
        info!("Rendered {} traces into {:?}", figure.data.len(), path);
        Ok(())
    }
}
