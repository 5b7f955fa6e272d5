//! the alert group payload and its reconciliation operations
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    alert::Alert,
    error::{ModelError, Result},
    intersect::intersect,
    pattern::NamePattern,
    target::Target,
};

/// A batch of related alerts sharing a routing key, as delivered by the
/// alertmanager webhook.
///
/// Deserializing a payload derives the specific annotations and labels of
/// every alert from the common maps as supplied in the payload. Afterwards
/// the mutating methods keep the common/specific partition consistent on
/// their own; callers poking [Alert::annotations] or [Alert::labels] directly
/// have to follow up with [update_specific][Self::update_specific] or
/// [update_common][Self::update_common] themselves.
///
/// A method returning an error may have mutated part of the group already,
/// there is no rollback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawAlertGroup")]
pub struct AlertGroup {
    /// name of the receiver this group was routed to
    pub receiver: String,
    /// `firing` as long as at least one alert is firing, otherwise `resolved`
    pub status: String,
    #[serde(rename = "externalURL")]
    pub external_url: String,
    pub version: String,
    pub group_key: String,
    /// number of alerts the upstream router omitted from this payload
    pub truncated_alerts: u64,
    /// the label set the routing key was formed from
    pub group_labels: HashMap<String, String>,
    /// annotations identical across every alert of the group
    pub common_annotations: HashMap<String, String>,
    /// labels identical across every alert of the group
    pub common_labels: HashMap<String, String>,
    /// alerts in payload order
    pub alerts: Vec<Alert>,
    /// payload fields not covered by the schema, preserved verbatim
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Wire form of [AlertGroup] before the specific entries of its alerts are
/// derived.
///
/// Deserializing this directly is the cheap path for callers that want the
/// payload as delivered, without the derivation pass.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlertGroup {
    pub receiver: String,
    pub status: String,
    #[serde(rename = "externalURL", alias = "external_url")]
    pub external_url: String,
    pub version: String,
    #[serde(alias = "group_key")]
    pub group_key: String,
    #[serde(default, alias = "truncated_alerts")]
    pub truncated_alerts: u64,
    #[serde(alias = "group_labels")]
    pub group_labels: HashMap<String, String>,
    #[serde(alias = "common_annotations")]
    pub common_annotations: HashMap<String, String>,
    #[serde(alias = "common_labels")]
    pub common_labels: HashMap<String, String>,
    pub alerts: Vec<Alert>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl From<RawAlertGroup> for AlertGroup {
    fn from(raw: RawAlertGroup) -> Self {
        let mut group = AlertGroup {
            receiver: raw.receiver,
            status: raw.status,
            external_url: raw.external_url,
            version: raw.version,
            group_key: raw.group_key,
            truncated_alerts: raw.truncated_alerts,
            group_labels: raw.group_labels,
            common_annotations: raw.common_annotations,
            common_labels: raw.common_labels,
            alerts: raw.alerts,
            extra: raw.extra,
        };

        // the initial derivation runs against the common maps as supplied in
        // the payload, they are not recomputed here
        group.update_specific(Target::ALL);

        group
    }
}

impl AlertGroup {
    /// the common annotation or label map of this group
    pub fn common_entries(&self, target: Target) -> &HashMap<String, String> {
        match target {
            Target::Annotations => &self.common_annotations,
            Target::Labels => &self.common_labels,
        }
    }

    /// mutable access to the common annotation or label map of this group
    pub fn common_entries_mut(&mut self, target: Target) -> &mut HashMap<String, String> {
        match target {
            Target::Annotations => &mut self.common_annotations,
            Target::Labels => &mut self.common_labels,
        }
    }

    /// Recomputes the specific entries of every alert for the given targets,
    /// subtracting the names of the current common map from the alert's own
    /// map. The common maps are left untouched.
    pub fn update_specific<I>(&mut self, targets: I)
    where
        I: IntoIterator<Item = Target>,
    {
        for target in targets {
            let common = match target {
                Target::Annotations => &self.common_annotations,
                Target::Labels => &self.common_labels,
            };

            for alert in &mut self.alerts {
                alert.update_specific(target, common);
            }
        }
    }

    /// recomputes the specific annotations of every alert
    pub fn update_specific_annotations(&mut self) {
        self.update_specific([Target::Annotations]);
    }

    /// recomputes the specific labels of every alert
    pub fn update_specific_labels(&mut self) {
        self.update_specific([Target::Labels]);
    }

    /// Recomputes the common maps for the given targets as the key-value
    /// intersection over all alerts. The specific maps are not touched,
    /// callers wanting both sides consistent follow up with
    /// [update_specific][Self::update_specific].
    pub fn update_common<I>(&mut self, targets: I)
    where
        I: IntoIterator<Item = Target>,
    {
        for target in targets {
            let common = intersect(self.alerts.iter().map(|alert| alert.entries(target)));

            *self.common_entries_mut(target) = common;
        }
    }

    /// recomputes the common annotations from the alerts
    pub fn update_common_annotations(&mut self) {
        self.update_common([Target::Annotations]);
    }

    /// recomputes the common labels from the alerts
    pub fn update_common_labels(&mut self) {
        self.update_common([Target::Labels]);
    }

    /// Adds entries to every alert, skipping alerts that already carry the
    /// name. A name is written through to the common map only if afterwards
    /// every alert agrees on exactly the supplied value; otherwise the common
    /// map is left alone for that name. Recomputes the specific entries of
    /// the axis afterwards.
    pub fn add(&mut self, target: Target, entries: &HashMap<String, String>) {
        if entries.is_empty() {
            return;
        }

        for (name, value) in entries {
            let mut shared = !self.alerts.is_empty();

            for alert in &mut self.alerts {
                let existing = alert
                    .entries_mut(target)
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());

                if *existing != *value {
                    shared = false;
                }
            }

            if shared {
                self.common_entries_mut(target)
                    .insert(name.clone(), value.clone());
            }
        }

        self.update_specific([target]);
    }

    /// Adds entries to the common map and to every alert, overriding values
    /// that already exist. Recomputes the specific entries of the axis
    /// afterwards.
    pub fn overwrite(&mut self, target: Target, entries: &HashMap<String, String>) {
        if entries.is_empty() {
            return;
        }

        for (name, value) in entries {
            self.common_entries_mut(target)
                .insert(name.clone(), value.clone());

            for alert in &mut self.alerts {
                alert
                    .entries_mut(target)
                    .insert(name.clone(), value.clone());
            }
        }

        self.update_specific([target]);
    }

    /// Prepends a prefix to existing entries, in the common map and on every
    /// alert. The addressed name has to exist everywhere it is prefixed,
    /// otherwise the call fails with [ModelError::MissingEntry] and entries
    /// processed up to that point stay mutated. Recomputes the specific
    /// entries of the axis afterwards.
    pub fn add_prefix(&mut self, target: Target, prefixes: &HashMap<String, String>) -> Result<()> {
        if prefixes.is_empty() {
            return Ok(());
        }

        for (name, prefix) in prefixes {
            let value = self
                .common_entries_mut(target)
                .get_mut(name)
                .ok_or_else(|| ModelError::MissingEntry {
                    target,
                    name: name.clone(),
                })?;

            value.insert_str(0, prefix);

            for alert in &mut self.alerts {
                let value = alert.entries_mut(target).get_mut(name).ok_or_else(|| {
                    ModelError::MissingEntry {
                        target,
                        name: name.clone(),
                    }
                })?;

                value.insert_str(0, prefix);
            }
        }

        self.update_specific([target]);

        Ok(())
    }

    /// Removes entries by exact name from the common map, from every alert
    /// and from every alert's specific map. Names nothing carries are
    /// skipped. No recomputation pass follows, the specific maps are pruned
    /// directly.
    pub fn remove<S>(&mut self, target: Target, names: &[S])
    where
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();

            self.common_entries_mut(target).remove(name);

            for alert in &mut self.alerts {
                alert.entries_mut(target).remove(name);
                alert.specific_entries_mut(target).remove(name);
            }
        }
    }

    /// Removes every entry whose name matches one of the patterns anywhere,
    /// from the common map and from every alert, then recomputes the specific
    /// entries of the axis. Raw string patterns are compiled up front, a
    /// malformed one fails the call before anything is removed.
    pub fn remove_re<I>(&mut self, target: Target, patterns: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<NamePattern>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            compiled.push(pattern.into().compile()?);
        }

        if compiled.is_empty() {
            return Ok(());
        }

        for pattern in &compiled {
            let common = self.common_entries_mut(target);
            let len = common.len();
            common.retain(|name, _| !pattern.is_match(name));
            let removed = len - common.len();

            for alert in &mut self.alerts {
                alert
                    .entries_mut(target)
                    .retain(|name, _| !pattern.is_match(name));
            }

            debug!("pattern {} removed {} common {}", pattern, removed, target);
        }

        self.update_specific([target]);

        Ok(())
    }
}
