use serde::{Deserialize, Serialize};

/// One column of a chart payload.
///
/// X columns are either labels (`"2020-05-01"`, `"13:30"`) or numbers (age in
/// days or weeks); y columns are numbers where `null` marks a gap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)] //serialized as the bare array Plotly expects
pub enum SeriesData {
    Labels(Vec<String>),
    Values(Vec<Option<f64>>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Labels(labels) => labels.len(),
            SeriesData::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A column of `len` gaps, used when an optional series is absent.
    pub fn gaps(len: usize) -> Self {
        SeriesData::Values(vec![None; len])
    }
}

impl From<Vec<Option<f64>>> for SeriesData {
    fn from(values: Vec<Option<f64>>) -> Self {
        SeriesData::Values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_values_are_told_apart() {
        let labels: SeriesData = serde_json::from_str(r#"["2020-05-01", "2020-05-02"]"#).unwrap();
        assert_eq!(labels, SeriesData::Labels(vec!["2020-05-01".to_owned(), "2020-05-02".to_owned()]));

        let values: SeriesData = serde_json::from_str("[1, 2.5, null]").unwrap();
        assert_eq!(values, SeriesData::Values(vec![Some(1.0), Some(2.5), None]));
    }

    #[test]
    fn mixed_column_is_rejected() {
        assert!(serde_json::from_str::<SeriesData>(r#"["a", 1]"#).is_err());
    }

    #[test]
    fn gaps_serialize_as_nulls() {
        assert_eq!(serde_json::to_string(&SeriesData::gaps(2)).unwrap(), "[null,null]");
        assert_eq!(SeriesData::gaps(3).len(), 3);
    }
}
