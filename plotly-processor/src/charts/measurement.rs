use crate::builders::{create_lines_and_markers, create_sum_histogram};
use crate::figure::Figure;
use crate::layout::Layout;
use crate::line::Line;
use crate::marker::Marker;
use crate::options::DisplayOptions;
use crate::payloads::MeasurementPayload;

const EVENTS_OPACITY: f64 = 0.3;

pub fn build_measurement_graph(payload: MeasurementPayload, _options: Option<&DisplayOptions>) -> Figure {
    let weeks = &payload.age_weeks;

    let height = create_lines_and_markers("Height", weeks, payload.height, "blue", Line::spline("dot", "grey"));
    let weight = create_lines_and_markers("Weight", weeks, payload.weight, "green", Line::spline("dot", "grey"));

    let mut events = create_sum_histogram("Events", weeks, payload.nr_events);
    events.opacity = Some(EVENTS_OPACITY);
    events.marker = Some(Marker::colored("red"));

    Figure::new(vec![height, weight, events], Layout::with_x_title("Age (weeks)"))
}
