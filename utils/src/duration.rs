use serde::{Deserialize, Deserializer, Serialize};

/// Elapsed time split into days, hours and minutes, as the server's
/// `data/check/` endpoint reports it (`since_d`, `since_h`, `since_m`).
///
/// The components are taken as they come; nothing is carried between units.
/// An entry dated in the future yields negative counts (`"-1"` days).
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Since {
    #[serde(rename = "since_d", default, deserialize_with = "count_from_text_or_number")]
    pub days: i32,
    #[serde(rename = "since_h", default, deserialize_with = "count_from_text_or_number")]
    pub hours: i32,
    #[serde(rename = "since_m", default, deserialize_with = "count_from_text_or_number")]
    pub minutes: i32,
}

impl Since {
    pub fn new(days: i32, hours: i32, minutes: i32) -> Self {
        Self { days, hours, minutes }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }
}

// the server sends these as decimal strings ("3"), older payloads as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Number(i32),
    Text(String),
}

fn count_from_text_or_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(n) => Ok(n),
        TextOrNumber::Text(text) => text.trim().parse::<i32>().map_err(serde::de::Error::custom),
    }
}

fn append_unit(out: &mut String, value: i32, unit: &str) {
    if value == 0 {
        return;
    }
    out.push(' ');
    out.push_str(&value.to_string());
    out.push(' ');
    out.push_str(unit);
    if value > 1 {
        out.push('s');
    }
}

/// Renders a [`Since`] as " 1 day 2 hours 5 minutes".
///
/// Every non-zero unit is prefixed with a single space, so a non-empty result
/// always starts with one. Zero units are left out; all zero gives `""`.
pub fn since_str(since: &Since) -> String {
    let mut out = String::new();
    append_unit(&mut out, since.days, "day");
    append_unit(&mut out, since.hours, "hour");
    append_unit(&mut out, since.minutes, "minute");
    out
}
