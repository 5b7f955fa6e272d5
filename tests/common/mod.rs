#![allow(dead_code)]
//! shared fixture plumbing for the integration tests
use std::collections::HashMap;

use alertmanager_model::AlertGroup;

/// the two alert webhook payload every scenario test runs against
pub const PAYLOAD: &str = include_str!("../fixtures/payload-simple.json");

/// deserializes the fixture payload, deriving the specific entries
pub fn simple_group() -> AlertGroup {
    serde_json::from_str(PAYLOAD).unwrap()
}

/// builds an owned string map from string pairs
pub fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
