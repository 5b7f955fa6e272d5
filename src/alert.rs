//! data structures for a single alert of a webhook payload
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::target::Target;

/// One firing or resolved alert as delivered inside an alertmanager webhook
/// payload.
///
/// Accepts both the camelCase wire spelling and snake_case field names on
/// input and serializes back to the wire form. Payload fields outside the
/// schema are preserved verbatim in [extra][Self::extra]. The
/// `specific_annotations` and `specific_labels` maps are derived state owned
/// by the enclosing [AlertGroup][crate::AlertGroup]; mutating
/// [annotations][Self::annotations] or [labels][Self::labels] directly leaves
/// them stale until the group recomputes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// stable identifier of the underlying alerting condition
    pub fingerprint: String,
    /// `firing` or `resolved`
    pub status: String,
    #[serde(alias = "starts_at")]
    pub starts_at: DateTime<Utc>,
    #[serde(alias = "ends_at")]
    pub ends_at: DateTime<Utc>,
    /// url of the expression this alert originates from
    #[serde(rename = "generatorURL", alias = "generator_url")]
    pub generator_url: String,
    /// free form descriptive metadata
    pub annotations: HashMap<String, String>,
    /// identifying metadata used for routing and grouping
    pub labels: HashMap<String, String>,

    /// annotations specific to this alert in the context of the whole group,
    /// derived by the owning group
    #[serde(default, alias = "specific_annotations")]
    pub specific_annotations: HashMap<String, String>,
    /// labels specific to this alert in the context of the whole group,
    /// derived by the owning group
    #[serde(default, alias = "specific_labels")]
    pub specific_labels: HashMap<String, String>,

    /// payload fields not covered by the schema, preserved verbatim
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Alert {
    /// the annotation or label map of this alert
    pub fn entries(&self, target: Target) -> &HashMap<String, String> {
        match target {
            Target::Annotations => &self.annotations,
            Target::Labels => &self.labels,
        }
    }

    /// mutable access to the annotation or label map of this alert
    pub fn entries_mut(&mut self, target: Target) -> &mut HashMap<String, String> {
        match target {
            Target::Annotations => &mut self.annotations,
            Target::Labels => &mut self.labels,
        }
    }

    /// the derived specific annotation or label map of this alert
    pub fn specific_entries(&self, target: Target) -> &HashMap<String, String> {
        match target {
            Target::Annotations => &self.specific_annotations,
            Target::Labels => &self.specific_labels,
        }
    }

    pub(crate) fn specific_entries_mut(&mut self, target: Target) -> &mut HashMap<String, String> {
        match target {
            Target::Annotations => &mut self.specific_annotations,
            Target::Labels => &mut self.specific_labels,
        }
    }

    /// recomputes the specific entries of one axis: every entry whose name is
    /// absent from `common`, by name alone
    pub(crate) fn update_specific(&mut self, target: Target, common: &HashMap<String, String>) {
        let specific = self
            .entries(target)
            .iter()
            .filter(|(name, _)| !common.contains_key(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        *self.specific_entries_mut(target) = specific;
    }
}
