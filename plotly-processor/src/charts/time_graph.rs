use crate::builders::{counts_to_text, create_bar, create_markers};
use crate::figure::Figure;
use crate::layout::{Axis, Layout};
use crate::options::{visibility, DisplayOptions};
use crate::payloads::SummaryPayload;
use log::debug;

const NIGHT_COLOR: &str = "rgb(100,000,230)";
const DAY_COLOR: &str = "rgb(245,200,050)";
const TOTAL_COLOR: &str = "rgb(000,000,000)";
const DIAPERS_COLOR: &str = "rgb(0,200,050)";
const MEALS_COLOR: &str = "rgb(245,0,050)";

/// Daily sleep as stacked night/day bars with the total on top, plus diaper
/// and meal counts, all over the payload's `day` column.
///
/// Sleep traces follow `plots.sleep`, the others their own toggle. A missing
/// diaper or meal column is drawn as gaps.
pub fn build_time_graph(payload: SummaryPayload, options: Option<&DisplayOptions>) -> Figure {
    let days = &payload.day;
    let sleep_visible = visibility(options, |plots| plots.sleep);

    let mut night = create_bar("Night (h)", days, payload.night_h, NIGHT_COLOR);
    night.text = counts_to_text(payload.night_cnt);
    night.visible = sleep_visible;

    let mut day = create_bar("Day (h)", days, payload.day_h, DAY_COLOR);
    day.text = counts_to_text(payload.day_cnt);
    day.visible = sleep_visible;

    let mut total = create_markers("Total (h)", days, payload.sum_h, TOTAL_COLOR);
    total.text = counts_to_text(payload.sum_cnt);
    total.visible = sleep_visible;

    let gaps = || vec![None; days.len()];
    let mut diapers = create_markers("Diapers", days, payload.diapers.unwrap_or_else(gaps), DIAPERS_COLOR);
    diapers.visible = visibility(options, |plots| plots.diapers);

    let mut meals = create_markers("Meals", days, payload.meals.unwrap_or_else(gaps), MEALS_COLOR);
    meals.visible = visibility(options, |plots| plots.meals);

    debug!("time graph over {} days", days.len());

    let layout = Layout {
        yaxis: Some(Axis::tick_labels(true)),
        barmode: Some("stack".to_owned()),
        ..Layout::new()
    };
    Figure::new(vec![night, day, total, diapers, meals], layout)
}
