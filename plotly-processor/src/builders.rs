use crate::line::Line;
use crate::marker::Marker;
use crate::series::SeriesData;
use crate::trace::{Trace, TraceType};

pub fn create_bar(name: &str, x: &SeriesData, y: Vec<Option<f64>>, color: &str) -> Trace {
    let mut trace = Trace::new(name, TraceType::Bar, x.clone(), y.into());
    trace.marker = Some(Marker::colored(color));
    trace
}

pub fn create_markers(name: &str, x: &SeriesData, y: Vec<Option<f64>>, color: &str) -> Trace {
    let mut trace = Trace::new(name, TraceType::Scatter, x.clone(), y.into());
    trace.mode = Some("markers".to_owned());
    trace.marker = Some(Marker::colored(color));
    trace
}

pub fn create_lines_and_markers(name: &str, x: &SeriesData, y: Vec<Option<f64>>, marker_color: &str, line: Line) -> Trace {
    let mut trace = Trace::new(name, TraceType::Scatter, x.clone(), y.into());
    trace.mode = Some("lines+markers".to_owned());
    trace.marker = Some(Marker::colored(marker_color));
    trace.line = Some(line);
    trace.connectgaps = Some(true);
    trace
}

pub fn create_curve(name: &str, x: &SeriesData, y: Vec<Option<f64>>, line: Line) -> Trace {
    let mut trace = Trace::new(name, TraceType::Scatter, x.clone(), y.into());
    trace.mode = Some("lines".to_owned());
    trace.line = Some(line);
    trace
}

/// Histogram whose bars add up the y values falling into each x bin.
pub fn create_sum_histogram(name: &str, x: &SeriesData, y: Vec<Option<f64>>) -> Trace {
    let mut trace = Trace::new(name, TraceType::Histogram, x.clone(), y.into());
    trace.histfunc = Some("sum".to_owned());
    trace
}

/// Counts as bar labels.
pub fn counts_to_text(counts: Option<Vec<u32>>) -> Option<Vec<String>> {
    counts.map(|counts| counts.iter().map(|count| count.to_string()).collect())
}
