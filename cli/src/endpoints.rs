use url::{ParseError, Url};

/// Data endpoints of one child, all relative to `{baseUrl}/{childId}/data/`.
#[derive(Debug, Clone)]
pub struct Endpoints {
    data_root: Url,
}

impl Endpoints {
    pub fn new(base_url: &str, child_id: u32) -> Result<Self, ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let data_root = base.join(&format!("{}/data/", child_id))?;
        Ok(Endpoints { data_root })
    }

    pub fn summary(&self) -> Result<Url, ParseError> {
        self.data_root.join("summary/graph/")
    }

    pub fn histogram(&self) -> Result<Url, ParseError> {
        self.data_root.join("histogram/")
    }

    pub fn percentiles(&self, measurement: &str) -> Result<Url, ParseError> {
        self.data_root.join(&format!("percentiles/{}/", measurement))
    }

    pub fn measurements(&self) -> Result<Url, ParseError> {
        self.data_root.join("measurements/")
    }

    pub fn check(&self) -> Result<Url, ParseError> {
        self.data_root.join("check/")
    }
}
