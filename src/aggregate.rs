use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Reduces the values of records that share a key.
///
/// Keys come back in the order they are first seen. Each value is the left
/// fold of `op` over that key's values, seeded with the first one.
pub fn aggregate_by<T, K, V>(
    records: &[T],
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(&T) -> V,
    op: impl Fn(V, V) -> V,
) -> Vec<(K, V)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<(K, Option<V>)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        let value = value_fn(record);
        match index.get(&key) {
            Some(&slot) => {
                let entry = &mut out[slot].1;
                *entry = entry.take().map(|acc| op(acc, value));
            }
            None => {
                index.insert(key.clone(), out.len());
                out.push((key, Some(value)));
            }
        }
    }

    out.into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

pub fn sum_by<T, K>(
    records: &[T],
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(&T) -> f64,
) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
{
    aggregate_by(records, key_fn, value_fn, |a, b| a + b)
}

/// Buckets records by key, first-seen order, without reducing them.
pub fn group_by<T, K>(records: &[T], key_fn: impl Fn(&T) -> K) -> Vec<(K, Vec<&T>)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}

/// Keeps the `n` best-ranked items. The sort is stable, so ties stay in
/// their original order.
pub fn top_n<T>(mut items: Vec<T>, n: usize, compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    items.sort_by(compare);
    items.truncate(n);
    items
}

/// Larger first.
pub fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
