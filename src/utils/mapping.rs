// src/utils/mapping.rs

use crate::core::{InterpretError, Result};
use log::debug;
use std::collections::HashMap;
use std::hash::Hash;

/// Pairs each feature name with the value at the same position.
///
/// Order is preserved; nothing is sorted or de-duplicated.
pub fn gen_feat_val_list<N, V>(features: &[N], values: &[V]) -> Result<Vec<(String, V)>>
where
    N: AsRef<str>,
    V: Clone,
{
    if features.len() != values.len() {
        return Err(InterpretError::length_mismatch("values", features.len(), values.len()));
    }

    Ok(features
        .iter()
        .zip(values)
        .map(|(name, value)| (name.as_ref().to_string(), value.clone()))
        .collect())
}

/// Inverts a one-to-one mapping.
///
/// Values are expected to be unique. A repeated value keeps the key of the
/// last pair in iteration order.
pub fn reverse_map<K, V, I>(map: I) -> HashMap<V, K>
where
    I: IntoIterator<Item = (K, V)>,
    V: Eq + Hash,
{
    let mut reversed = HashMap::new();
    for (key, value) in map {
        if reversed.insert(value, key).is_some() {
            debug!("reverse_map: duplicate value, keeping the later key");
        }
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_that_feat_val_generated() -> Result<()> {
        let features = ["age", "race", "gender"];
        let values = [-2, 3, 1];

        let feat_val_list = gen_feat_val_list(&features, &values)?;
        assert_eq!(
            feat_val_list,
            vec![
                ("age".to_string(), -2),
                ("race".to_string(), 3),
                ("gender".to_string(), 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_feat_val_keeps_duplicates_in_order() -> Result<()> {
        let features = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let pairs = gen_feat_val_list(&features, &[0.5, 1.5, 2.5])?;
        assert_eq!(pairs[0], ("b".to_string(), 0.5));
        assert_eq!(pairs[2], ("b".to_string(), 2.5));
        Ok(())
    }

    #[test]
    fn test_feat_val_length_mismatch() {
        let res = gen_feat_val_list(&["age", "race"], &[1]);
        assert!(matches!(
            res,
            Err(InterpretError::LengthMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_reverse_map() {
        let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let actual_rev_map = reverse_map(map);
        let expected_rev_map = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);

        assert_eq!(actual_rev_map, expected_rev_map);
    }

    #[test]
    fn test_reverse_map_last_key_wins() {
        let map = BTreeMap::from([("a", 1), ("b", 1), ("c", 2)]);
        let rev = reverse_map(&map);
        assert_eq!(rev.len(), 2);
        assert_eq!(rev[&&1], &"b");
        assert_eq!(rev[&&2], &"c");
    }
}
