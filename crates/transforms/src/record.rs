//! Transforms over keyed records.
//!
//! Grouping and key filtering both preserve insertion order, so output maps
//! read in the same order the data arrived in.

use indexmap::IndexMap;
use std::hash::Hash;

/// Group items by the key computed for each.
///
/// Keys appear in the order of their first occurrence, and items within a
/// group keep their input order.
pub fn group_by<T, K, F>(items: &[T], key: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    group_by_with(items, key, Clone::clone)
}

/// Group items by key, applying `transform` to each item as it is grouped.
pub fn group_by_with<T, K, V, F, G>(items: &[T], key: F, transform: G) -> IndexMap<K, Vec<V>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    G: Fn(&T) -> V,
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(transform(item));
    }
    groups
}

/// Keep only the named keys of a record, in the record's own order.
///
/// Requested keys that are absent from the record are ignored.
#[must_use]
pub fn keep_keys<V, S>(record: &IndexMap<String, V>, keys: &[S]) -> IndexMap<String, V>
where
    V: Clone,
    S: AsRef<str>,
{
    record
        .iter()
        .filter(|(k, _)| keys.iter().any(|want| want.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Lower-case every key of a record.
///
/// When two keys collide after lowering, the later value wins but the entry
/// stays at the first key's position.
#[must_use]
pub fn lowercase_keys<V>(record: &IndexMap<String, V>) -> IndexMap<String, V>
where
    V: Clone,
{
    let mut out = IndexMap::with_capacity(record.len());
    for (k, v) in record {
        out.insert(k.to_lowercase(), v.clone());
    }
    out
}
