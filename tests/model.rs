//! construction, field aliasing and round trip behavior of the payload schema
mod common;

use std::collections::HashMap;

use alertmanager_model::{Alert, AlertGroup, RawAlertGroup, Silence};
use chrono::{DateTime, Utc};
use common::{map, simple_group, PAYLOAD};

#[test]
fn create_alert_group() {
    let group = simple_group();

    assert_eq!(group.receiver, "generic");
    assert_eq!(group.status, "firing");
    assert_eq!(group.external_url, "http://1217896f2a1d:9093");
    assert_eq!(group.version, "4");
    assert_eq!(group.group_key, r#"{}:{alertname="WhatEver"}"#);
    assert_eq!(group.truncated_alerts, 0);
    assert_eq!(group.group_labels, map(&[("alertname", "WhatEver")]));
    assert_eq!(group.common_labels.len(), 3);
    assert_eq!(group.common_annotations.len(), 2);
    assert!(group.extra.is_empty());
}

#[test]
fn create_alert_group_alerts() {
    let group = simple_group();

    assert_eq!(group.alerts[0].labels.len(), 4);
    assert_eq!(group.alerts[0].annotations.len(), 2);
    assert_eq!(group.alerts[1].labels.len(), 3);
    assert_eq!(group.alerts[1].annotations.len(), 3);
}

#[test]
fn derives_specific_entries_on_deserialize() {
    let group = simple_group();

    assert_eq!(group.alerts[0].specific_labels, map(&[("mu", "sik")]));
    assert_eq!(group.alerts[0].specific_annotations, HashMap::new());
    assert_eq!(group.alerts[1].specific_labels, HashMap::new());
    assert_eq!(
        group.alerts[1].specific_annotations,
        map(&[("this", "isspecific")])
    );
}

#[test]
fn raw_group_skips_derivation() -> anyhow::Result<()> {
    let raw: RawAlertGroup = serde_json::from_str(PAYLOAD)?;

    assert!(raw.alerts[0].specific_labels.is_empty());
    assert!(raw.alerts[1].specific_annotations.is_empty());

    let group = AlertGroup::from(raw);

    assert_eq!(group.alerts[0].specific_labels, map(&[("mu", "sik")]));

    Ok(())
}

#[test]
fn alert_accepts_either_spelling() -> anyhow::Result<()> {
    let camel: Alert = serde_json::from_str(
        r#"{
            "fingerprint": "x",
            "status": "firing",
            "startsAt": "2020-11-03T17:51:36.14925565Z",
            "endsAt": "2020-11-03T17:51:36.14925565Z",
            "generatorURL": "https://www.google.com",
            "labels": { "a": "b" },
            "annotations": { "a": "b" }
        }"#,
    )?;

    let snake: Alert = serde_json::from_str(
        r#"{
            "fingerprint": "x",
            "status": "firing",
            "starts_at": "2020-11-03T17:51:36.14925565Z",
            "ends_at": "2020-11-03T17:51:36.14925565Z",
            "generator_url": "https://www.google.com",
            "labels": { "a": "b" },
            "annotations": { "a": "b" }
        }"#,
    )?;

    assert_eq!(camel, snake);
    assert_eq!(camel.generator_url, "https://www.google.com");
    assert!(camel.specific_annotations.is_empty());
    assert!(camel.specific_labels.is_empty());

    let expected: DateTime<Utc> =
        DateTime::parse_from_rfc3339("2020-11-03T17:51:36.14925565Z")?.with_timezone(&Utc);
    assert_eq!(camel.starts_at, expected);

    Ok(())
}

#[test]
fn group_accepts_snake_case_aliases() -> anyhow::Result<()> {
    let group: AlertGroup = serde_json::from_str(
        r#"{
            "receiver": "generic",
            "status": "resolved",
            "external_url": "http://localhost:9093",
            "version": "4",
            "group_key": "{}:{}",
            "truncated_alerts": 2,
            "group_labels": {},
            "common_annotations": {},
            "common_labels": {},
            "alerts": []
        }"#,
    )?;

    assert_eq!(group.external_url, "http://localhost:9093");
    assert_eq!(group.group_key, "{}:{}");
    assert_eq!(group.truncated_alerts, 2);
    assert!(group.alerts.is_empty());

    Ok(())
}

#[test]
fn truncated_alerts_defaults_to_zero() -> anyhow::Result<()> {
    let group: AlertGroup = serde_json::from_str(
        r#"{
            "receiver": "generic",
            "status": "firing",
            "externalURL": "http://localhost:9093",
            "version": "4",
            "groupKey": "{}:{}",
            "groupLabels": {},
            "commonAnnotations": {},
            "commonLabels": {},
            "alerts": []
        }"#,
    )?;

    assert_eq!(group.truncated_alerts, 0);

    Ok(())
}

#[test]
fn unknown_fields_are_preserved() -> anyhow::Result<()> {
    let group: AlertGroup = serde_json::from_str(
        r#"{
            "receiver": "generic",
            "status": "firing",
            "externalURL": "http://localhost:9093",
            "version": "4",
            "groupKey": "{}:{}",
            "groupLabels": {},
            "commonAnnotations": {},
            "commonLabels": {},
            "orgId": 7,
            "alerts": [
                {
                    "fingerprint": "x",
                    "status": "firing",
                    "startsAt": "2020-11-03T17:51:36Z",
                    "endsAt": "2020-11-03T17:51:36Z",
                    "generatorURL": "http://localhost:9090",
                    "annotations": {},
                    "labels": {},
                    "instance": "node-1"
                }
            ]
        }"#,
    )?;

    assert_eq!(group.extra.get("orgId"), Some(&serde_json::json!(7)));
    assert_eq!(
        group.alerts[0].extra.get("instance"),
        Some(&serde_json::json!("node-1"))
    );

    let value = serde_json::to_value(&group)?;
    assert_eq!(value["orgId"], serde_json::json!(7));
    assert_eq!(value["alerts"][0]["instance"], serde_json::json!("node-1"));

    Ok(())
}

#[test]
fn serializes_wire_field_names() -> anyhow::Result<()> {
    let value = serde_json::to_value(simple_group())?;

    let group = value.as_object().unwrap();
    assert!(group.contains_key("externalURL"));
    assert!(group.contains_key("groupKey"));
    assert!(group.contains_key("truncatedAlerts"));
    assert!(group.contains_key("commonAnnotations"));
    assert!(!group.contains_key("external_url"));

    let alert = value["alerts"][0].as_object().unwrap();
    assert!(alert.contains_key("startsAt"));
    assert!(alert.contains_key("generatorURL"));
    assert!(alert.contains_key("specificLabels"));
    assert!(!alert.contains_key("starts_at"));

    Ok(())
}

#[test]
fn group_survives_a_value_round_trip() -> anyhow::Result<()> {
    let group = simple_group();

    let value = serde_json::to_value(group.clone())?;
    let parsed: AlertGroup = serde_json::from_value(value)?;

    assert_eq!(parsed, group);

    Ok(())
}

#[test]
fn silence_matcher_equality_defaults_to_true() -> anyhow::Result<()> {
    let silence: Silence = serde_json::from_str(
        r#"{
            "matchers": [
                { "name": "severity", "value": "warning", "isRegex": false },
                { "name": "job", "value": "node.*", "isRegex": true, "isEqual": false }
            ],
            "startsAt": "2020-11-03T17:51:36Z",
            "endsAt": "2020-11-03T19:51:36Z",
            "createdBy": "oncall",
            "comment": "maintenance window"
        }"#,
    )?;

    assert_eq!(silence.matchers.len(), 2);
    assert!(silence.matchers[0].is_equal);
    assert!(!silence.matchers[0].is_regex);
    assert!(!silence.matchers[1].is_equal);
    assert_eq!(silence.created_by, "oncall");

    let value = serde_json::to_value(&silence)?;
    assert!(value["matchers"][0]["isRegex"].is_boolean());
    assert!(value.as_object().unwrap().contains_key("createdBy"));

    let parsed: Silence = serde_json::from_value(value)?;
    assert_eq!(parsed, silence);

    Ok(())
}
