use crate::domain::model::Nested;
use crate::utils::error::{Result, UtilsError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

/// Returns the distinct elements of `items` in first-occurrence order.
///
/// ```
/// use small_utils::core::array::unique_elements;
/// assert_eq!(unique_elements(&[1, 2, 2, 3, 4, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn unique_elements<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Owning variant of [`unique_elements`].
pub fn remove_duplicates<T: Eq + Hash + Clone>(mut items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
    items
}

/// Flattens any depth of nesting into a single vector.
pub fn flatten<T>(items: Vec<Nested<T>>) -> Vec<T> {
    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        flatten_into(item, &mut flat);
    }
    flat
}

fn flatten_into<T>(item: Nested<T>, flat: &mut Vec<T>) {
    match item {
        Nested::Item(value) => flat.push(value),
        Nested::List(children) => {
            for child in children {
                flatten_into(child, flat);
            }
        }
    }
}

/// Flattens nested JSON arrays. A non-array value becomes a one-element vector.
pub fn flatten_json(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.iter().flat_map(flatten_json).collect(),
        other => vec![other.clone()],
    }
}

/// Splits `items` into consecutive chunks of `size`. The last chunk may be shorter.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(UtilsError::invalid_argument("size", "chunk size must be at least 1"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Elements of `first` that also occur in `second`, deduplicated.
pub fn intersection<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = second.iter().collect();
    unique_elements(first)
        .into_iter()
        .filter(|item| lookup.contains(item))
        .collect()
}

/// Elements of `first` that do not occur in `second`, deduplicated.
pub fn difference<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = second.iter().collect();
    unique_elements(first)
        .into_iter()
        .filter(|item| !lookup.contains(item))
        .collect()
}

/// Returns `items` in a random order.
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Same as [`shuffle`] with a caller-supplied generator.
pub fn shuffle_with<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn item(v: i32) -> Nested<i32> {
        Nested::Item(v)
    }

    #[test]
    fn test_unique_elements_numbers_and_strings() {
        assert_eq!(unique_elements(&[1, 2, 2, 3, 4, 4]), vec![1, 2, 3, 4]);
        assert_eq!(unique_elements(&["a", "b", "b", "c"]), vec!["a", "b", "c"]);
        assert_eq!(unique_elements(&[1, 1, 1, 1]), vec![1]);
        assert!(unique_elements::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_unique_elements_is_idempotent() {
        let once = unique_elements(&[3, 1, 3, 2, 1]);
        assert_eq!(unique_elements(&once), once);
        assert_eq!(once, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_duplicates() {
        assert_eq!(remove_duplicates(vec![1, 2, 2, 3, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(remove_duplicates(vec![1, 2, 3, 4]), vec![1, 2, 3, 4]);
        assert!(remove_duplicates(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_flatten_nested() {
        let nested = vec![
            item(1),
            Nested::List(vec![item(2), item(3)]),
            Nested::List(vec![item(4), Nested::List(vec![item(5)])]),
        ];
        assert_eq!(flatten(nested), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_deep_and_flat() {
        let deep = vec![
            item(1),
            Nested::List(vec![item(2), Nested::List(vec![item(3), Nested::List(vec![item(4)])])]),
        ];
        assert_eq!(flatten(deep), vec![1, 2, 3, 4]);
        assert_eq!(flatten(vec![item(1), item(2), item(3)]), vec![1, 2, 3]);
        assert!(flatten::<i32>(vec![]).is_empty());
    }

    #[test]
    fn test_flatten_json() {
        let value = json!([1, [2, 3], [4, [5]]]);
        assert_eq!(flatten_json(&value), vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
        assert!(flatten_json(&json!([])).is_empty());
        assert_eq!(flatten_json(&json!("x")), vec![json!("x")]);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(chunk(&[1, 2, 3], 5).unwrap(), vec![vec![1, 2, 3]]);
        assert_eq!(chunk(&[1, 2, 3], 1).unwrap(), vec![vec![1], vec![2], vec![3]]);
        assert!(chunk::<i32>(&[], 2).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_rejects_zero_size() {
        assert!(matches!(
            chunk(&[1, 2, 3], 0),
            Err(UtilsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
        assert!(intersection(&[1, 2, 3], &[4, 5, 6]).is_empty());
        assert!(intersection(&[], &[4, 5, 6]).is_empty());
        assert_eq!(intersection(&[2, 2, 3], &[2]), vec![2]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[1, 2, 3], &[2, 3, 4]), vec![1]);
        assert_eq!(difference(&[1, 2, 3], &[4, 5, 6]), vec![1, 2, 3]);
        assert!(difference::<i32>(&[], &[]).is_empty());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = shuffle_with((1..=20).collect::<Vec<_>>(), &mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, (1..=20).collect::<Vec<_>>());
        assert_eq!(shuffle(vec![42]), vec![42]);
    }
}
