use crate::builders::create_sum_histogram;
use crate::figure::Figure;
use crate::layout::{Axis, Layout};
use crate::options::{visibility, DisplayOptions};
use crate::payloads::HistogramPayload;

// x ticks every 6 slots from the first one
const TICK_START: f64 = 0.0;
const TICK_STEP: f64 = 6.0;

pub fn build_histogram(payload: HistogramPayload, options: Option<&DisplayOptions>) -> Figure {
    let time = &payload.time;

    let mut sleep = create_sum_histogram("Sleep", time, payload.sleep);
    sleep.visible = visibility(options, |plots| plots.sleep);

    let mut meals = create_sum_histogram("Meals", time, payload.meals);
    meals.visible = visibility(options, |plots| plots.meals);

    let mut diapers = create_sum_histogram("Diapers", time, payload.diapers);
    diapers.visible = visibility(options, |plots| plots.diapers);

    let layout = Layout {
        xaxis: Some(Axis::fixed_ticks(TICK_START, TICK_STEP)),
        yaxis: Some(Axis::tick_labels(false)),
        ..Layout::new()
    };
    Figure::new(vec![sleep, meals, diapers], layout)
}
