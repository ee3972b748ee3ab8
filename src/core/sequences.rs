use crate::utils::error::{KitError, Result};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;

/// Collapses each run of adjacent equal elements to its first element.
pub fn compact<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut compacted: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if compacted.last() != Some(item) {
            compacted.push(item.clone());
        }
    }
    compacted
}

/// The last `n` elements of `items`, in order. `n <= 0` gives an empty vec
/// and `n` past the length gives the whole slice.
pub fn tail<T: Clone>(items: &[T], n: isize) -> Vec<T> {
    if n <= 0 {
        return Vec::new();
    }
    let start = items.len().saturating_sub(n as usize);
    items[start..].to_vec()
}

/// Same contract as [`tail`] for any iterator; keeps at most `n` elements.
pub fn tail_iter<I>(items: I, n: isize) -> Vec<I::Item>
where
    I: IntoIterator,
{
    if n <= 0 {
        return Vec::new();
    }
    let n = n as usize;
    let mut window: VecDeque<I::Item> = VecDeque::new();
    for item in items {
        if window.len() == n {
            window.pop_front();
        }
        window.push_back(item);
    }
    window.into_iter().collect()
}

/// Distinct elements in order of first occurrence.
pub fn uniques_only<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut uniques = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            uniques.push(item);
        }
    }
    uniques
}

/// Buckets elements by `key`, keeping input order inside each bucket.
pub fn group_by<I, K, F>(items: I, mut key: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Buckets elements by their own value.
pub fn group_by_value<I>(items: I) -> HashMap<I::Item, Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    group_by(items, |item| item.clone())
}

/// Like [`group_by`] with a key function that can fail. The first failure
/// stops grouping and is reported as `KeyError` with the element's position.
pub fn try_group_by<I, K, E, F>(items: I, mut key: F) -> Result<HashMap<K, Vec<I::Item>>>
where
    I: IntoIterator,
    K: Eq + Hash,
    E: Display,
    F: FnMut(&I::Item) -> std::result::Result<K, E>,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for (index, item) in items.into_iter().enumerate() {
        let k = key(&item).map_err(|e| {
            tracing::debug!("Key function failed at element #{}: {}", index, e);
            KitError::KeyError {
                index,
                message: e.to_string(),
            }
        })?;
        groups.entry(k).or_default().push(item);
    }
    Ok(groups)
}
