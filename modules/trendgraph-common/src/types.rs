use serde::Deserialize;

/// One row of the upstream trend table. Extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendRecord {
    pub id: i64,
    #[serde(default)]
    pub keyword: String,
    /// Approximate search traffic in thousands. Absent counts as 0.
    #[serde(default)]
    pub approx_traffic: Option<i64>,
    /// Publication timestamp as reported upstream, e.g. "2024-03-01T08:00:00Z".
    #[serde(default)]
    pub pub_date: Option<String>,
    /// Semi-structured blob of related article links.
    #[serde(default)]
    pub media_links: Option<String>,
}

impl TrendRecord {
    pub fn search_volume(&self) -> i64 {
        self.approx_traffic.unwrap_or(0)
    }

    /// Human-readable traffic label, e.g. "50K+".
    pub fn traffic_label(&self) -> String {
        format!("{}K+", self.search_volume())
    }

    /// Calendar day this trend snapshots: the leading `YYYY-MM-DD` of
    /// pub_date when present, otherwise the supplied processing date.
    pub fn snapshot_date(&self, today: &str) -> String {
        self.pub_date
            .as_deref()
            .and_then(|d| d.get(..10))
            .map(str::to_string)
            .unwrap_or_else(|| today.to_string())
    }
}

/// One article reference parsed out of a trend's media_links blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    pub title: String,
    pub url: String,
    /// Publishing domain: lowercased host with any leading "www." removed.
    pub source: String,
}
