//! the alertmanager silence schema
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// a single label matcher of a [Silence]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Matcher {
    /// label name the matcher applies to
    pub name: String,
    /// value or pattern matched against
    pub value: String,
    /// whether `value` is a regular expression
    pub is_regex: bool,
    /// whether the matcher asserts equality or inequality
    #[serde(default = "default_is_equal")]
    pub is_equal: bool,
}

fn default_is_equal() -> bool {
    true
}

/// a suppression rule as accepted by the alertmanager silence api
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Silence {
    /// alerts matching all matchers are silenced
    pub matchers: Vec<Matcher>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_by: String,
    /// free text describing why the silence exists
    pub comment: String,
}
