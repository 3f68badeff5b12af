use crate::builders::create_curve;
use crate::figure::Figure;
use crate::layout::Layout;
use crate::line::Line;
use crate::marker::Marker;
use crate::options::DisplayOptions;
use crate::payloads::PercentilePayload;
use crate::trace::{Trace, TraceType};

/// Dash pattern and colour of one reference curve. Curves mirrored around
/// the median (p25/p75, p10/p90, p5/p95) share a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveStyle {
    pub dash: &'static str,
    pub color: &'static str,
}

const OUTER: CurveStyle = CurveStyle { dash: "dashdot", color: "red" };
const WIDE: CurveStyle = CurveStyle { dash: "dot", color: "orange" };
const QUARTILE: CurveStyle = CurveStyle { dash: "dashdot", color: "grey" };
const MEDIAN: CurveStyle = CurveStyle { dash: "solid", color: "black" };

pub const PERCENTILE_STYLES: [(&str, CurveStyle); 7] = [
    ("p5", OUTER),
    ("p10", WIDE),
    ("p25", QUARTILE),
    ("p50", MEDIAN),
    ("p75", QUARTILE),
    ("p90", WIDE),
    ("p95", OUTER),
];

const VALUE_MARKER_SIZE: i8 = 10;

/// The child's values as large markers over seven percentile reference curves.
///
/// Display options are accepted for symmetry with the other charts; none of
/// these traces is gated.
pub fn build_percentile_graph(payload: PercentilePayload, _options: Option<&DisplayOptions>) -> Figure {
    let PercentilePayload { day, value, p5, p10, p25, p50, p75, p90, p95 } = payload;

    let mut measured = Trace::new("value", TraceType::Scatter, day.clone(), value.into());
    measured.mode = Some("markers".to_owned());
    measured.marker = Some(Marker {
        color: Some("blue".to_owned()),
        size: Some(VALUE_MARKER_SIZE),
    });

    let mut data = vec![measured];
    let curves = [p5, p10, p25, p50, p75, p90, p95];
    for ((name, style), y) in PERCENTILE_STYLES.iter().zip(curves) {
        data.push(create_curve(name, &day, y, Line::spline(style.dash, style.color)));
    }

    Figure::new(data, Layout::with_x_title("Age (days)"))
}
