//! key-value intersection of a sequence of string maps
use std::collections::HashMap;

use hashbrown::HashSet;

/// Computes the key-value intersection of a sequence of maps.
///
/// A pair survives only if every single map contains the key with that exact
/// value; a key shared by all maps with differing values is dropped entirely,
/// not merged. An empty sequence yields an empty map, a single map is copied.
/// The inputs are never mutated.
pub fn intersect<'a, I>(maps: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = &'a HashMap<String, String>>,
{
    let mut maps = maps.into_iter();

    let first = match maps.next() {
        Some(first) => first,
        None => return HashMap::new(),
    };

    let mut common: HashSet<(&str, &str)> = first
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    for map in maps {
        let pairs: HashSet<(&str, &str)> = map
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        common.retain(|pair| pairs.contains(pair));
    }

    common
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}
