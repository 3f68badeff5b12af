use serde::{Deserialize, Serialize};
use slogger_utils::duration::{since_str, Since};

/// Last known state of one activity, as `data/check/` reports it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityStatus {
    pub state: i8,
    #[serde(flatten)]
    pub since: Since,
}

/// Answer of the `data/check/` endpoint: how long since the last meal,
/// diaper and sleep change.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckPayload {
    pub eat: ActivityStatus,
    pub sleep: ActivityStatus,
    pub diaper: ActivityStatus,
}

// sleep: 0 asleep, 1 awake, -1 nothing logged; eat/diaper: 1 logged
const SLEEP_ASLEEP: i8 = 0;
const SLEEP_AWAKE: i8 = 1;
const LOGGED: i8 = 1;

fn ago(label: &str, since: &Since) -> String {
    if since.is_zero() {
        format!("{} just now", label)
    } else {
        format!("{}{} ago", label, since_str(since))
    }
}

impl CheckPayload {
    pub fn describe_sleep(&self) -> String {
        let since = &self.sleep.since;
        match self.sleep.state {
            SLEEP_ASLEEP if since.is_zero() => "Fell asleep just now".to_owned(),
            SLEEP_ASLEEP => format!("Sleeping for{}", since_str(since)),
            SLEEP_AWAKE if since.is_zero() => "Woke up just now".to_owned(),
            SLEEP_AWAKE => format!("Awake for{}", since_str(since)),
            _ => "No sleep logged".to_owned(),
        }
    }

    pub fn describe_meal(&self) -> String {
        if self.eat.state == LOGGED {
            ago("Last meal", &self.eat.since)
        } else {
            "No meals logged".to_owned()
        }
    }

    pub fn describe_diaper(&self) -> String {
        if self.diaper.state == LOGGED {
            ago("Last diaper", &self.diaper.since)
        } else {
            "No diapers logged".to_owned()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![self.describe_sleep(), self.describe_meal(), self.describe_diaper()]
    }
}
