//! "As-of" lookups: for a probe key, the entry with the greatest key <= probe.

/// Value attached to the last key `<= probe` in a `(key, value)` list sorted
/// by key. `None` when every key is after `probe`.
pub fn asof_value<'a, K: Ord, V>(entries: &'a [(K, V)], probe: &K) -> Option<&'a V> {
    let idx = entries.partition_point(|(k, _)| k <= probe).checked_sub(1)?;
    entries.get(idx).map(|(_, v)| v)
}
