use crate::series::SeriesData;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum PayloadError {
    Decode(serde_json::Error),
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        PayloadError::Decode(err)
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Decode(e) => write!(f, "Payload decode error: {}", e),
            PayloadError::LengthMismatch { field, expected, actual } => write!(
                f,
                "Series \"{}\" has {} points, expected {}",
                field, actual, expected
            ),
        }
    }
}

impl std::error::Error for PayloadError {}

/// A server response whose columns all line up with one x column.
pub trait ChartPayload: DeserializeOwned {
    fn x(&self) -> &SeriesData;

    /// Name and length of every column present besides x.
    fn columns(&self) -> Vec<(&'static str, usize)>;

    fn validate(&self) -> Result<(), PayloadError> {
        let expected = self.x().len();
        for (field, actual) in self.columns() {
            if actual != expected {
                return Err(PayloadError::LengthMismatch { field, expected, actual });
            }
        }
        Ok(())
    }

    fn from_value(value: Value) -> Result<Self, PayloadError> {
        let payload: Self = serde_json::from_value(value)?;
        payload.validate()?;
        Ok(payload)
    }
}

fn optional_len<T>(column: &Option<Vec<T>>) -> Option<usize> {
    column.as_ref().map(Vec::len)
}

/// `data/summary/graph/`: daily sleep totals plus diaper and meal counts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryPayload {
    pub day: SeriesData,
    pub night_h: Vec<Option<f64>>,
    pub day_h: Vec<Option<f64>>,
    pub sum_h: Vec<Option<f64>>,
    #[serde(default)]
    pub night_cnt: Option<Vec<u32>>,
    #[serde(default)]
    pub day_cnt: Option<Vec<u32>>,
    #[serde(default)]
    pub sum_cnt: Option<Vec<u32>>,
    #[serde(default)]
    pub diapers: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub meals: Option<Vec<Option<f64>>>,
}

impl ChartPayload for SummaryPayload {
    fn x(&self) -> &SeriesData {
        &self.day
    }

    fn columns(&self) -> Vec<(&'static str, usize)> {
        let mut columns = vec![
            ("night_h", self.night_h.len()),
            ("day_h", self.day_h.len()),
            ("sum_h", self.sum_h.len()),
        ];
        let optional = [
            ("night_cnt", optional_len(&self.night_cnt)),
            ("day_cnt", optional_len(&self.day_cnt)),
            ("sum_cnt", optional_len(&self.sum_cnt)),
            ("diapers", optional_len(&self.diapers)),
            ("meals", optional_len(&self.meals)),
        ];
        columns.extend(optional.into_iter().filter_map(|(field, len)| len.map(|len| (field, len))));
        columns
    }
}

/// `data/histogram/`: activity counts per time-of-day slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistogramPayload {
    pub time: SeriesData,
    pub sleep: Vec<Option<f64>>,
    pub meals: Vec<Option<f64>>,
    pub diapers: Vec<Option<f64>>,
}

impl ChartPayload for HistogramPayload {
    fn x(&self) -> &SeriesData {
        &self.time
    }

    fn columns(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("sleep", self.sleep.len()),
            ("meals", self.meals.len()),
            ("diapers", self.diapers.len()),
        ]
    }
}

/// `data/percentiles/<type>/`: the child's measurements against reference percentiles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PercentilePayload {
    pub day: SeriesData,
    pub value: Vec<Option<f64>>,
    pub p5: Vec<Option<f64>>,
    pub p10: Vec<Option<f64>>,
    pub p25: Vec<Option<f64>>,
    pub p50: Vec<Option<f64>>,
    pub p75: Vec<Option<f64>>,
    pub p90: Vec<Option<f64>>,
    pub p95: Vec<Option<f64>>,
}

impl ChartPayload for PercentilePayload {
    fn x(&self) -> &SeriesData {
        &self.day
    }

    fn columns(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("value", self.value.len()),
            ("p5", self.p5.len()),
            ("p10", self.p10.len()),
            ("p25", self.p25.len()),
            ("p50", self.p50.len()),
            ("p75", self.p75.len()),
            ("p90", self.p90.len()),
            ("p95", self.p95.len()),
        ]
    }
}

/// `data/measurements/`: height and weight by age plus logged event counts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeasurementPayload {
    pub age_weeks: SeriesData,
    pub height: Vec<Option<f64>>,
    pub weight: Vec<Option<f64>>,
    pub nr_events: Vec<Option<f64>>,
}

impl ChartPayload for MeasurementPayload {
    fn x(&self) -> &SeriesData {
        &self.age_weeks
    }

    fn columns(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("height", self.height.len()),
            ("weight", self.weight.len()),
            ("nr_events", self.nr_events.len()),
        ]
    }
}
