use chrono::NaiveDate;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query string of a data request, kept in insertion order and handed to the
/// transport as is.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Adds the `from`/`to` pair the server filters entries by.
    pub fn with_date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.with("from", &from.format(DATE_FORMAT).to_string())
            .with("to", &to.format(DATE_FORMAT).to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let query = QueryParams::new().with("raster", "10").with("child", "1");
        assert_eq!(
            query.pairs(),
            &[("raster".to_owned(), "10".to_owned()), ("child".to_owned(), "1".to_owned())]
        );
    }

    #[test]
    fn date_range_uses_iso_dates() {
        let from = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2020, 5, 31).unwrap();
        let query = QueryParams::new().with_date_range(from, to);
        assert_eq!(query.get("from"), Some("2020-05-01"));
        assert_eq!(query.get("to"), Some("2020-05-31"));
        assert_eq!(query.get("raster"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let query: QueryParams = vec![("from", "2020-01-01")].into_iter().collect();
        assert!(!query.is_empty());
        assert_eq!(query.get("from"), Some("2020-01-01"));
        assert!(QueryParams::new().is_empty());
    }
}
