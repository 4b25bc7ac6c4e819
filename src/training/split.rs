//! Stratified train/test splitting.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Split sample indices into train/test sets, stratified by label.
///
/// Each label contributes `test_fraction` of its samples (rounded) to the
/// test set, so class proportions survive the split. Shuffling is driven by
/// the seed alone; labels are visited in sorted order, making the split
/// fully deterministic. Classes too small to round to a single test sample
/// go entirely to train.
pub fn stratified_split(
    labels: &[String],
    test_fraction: f64,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        by_label.entry(label.as_str()).or_default().push(idx);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for (_, mut indices) in by_label {
        indices.shuffle(&mut rng);

        let mut n_test = (indices.len() as f64 * test_fraction).round() as usize;
        // Never let the test split swallow a whole class.
        if n_test >= indices.len() {
            n_test = indices.len().saturating_sub(1);
        }

        test.extend(indices.drain(..n_test));
        train.extend(indices);
    }

    train.sort_unstable();
    test.sort_unstable();
    (train, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_proportions() {
        let mut data = Vec::new();
        data.extend(std::iter::repeat_n("a", 80));
        data.extend(std::iter::repeat_n("b", 20));
        let labels = labels(&data);

        let (train, test) = stratified_split(&labels, 0.2, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);

        // Stratification: 16 of the test samples are "a", 4 are "b".
        let test_a = test.iter().filter(|&&i| labels[i] == "a").count();
        assert_eq!(test_a, 16);
    }

    #[test]
    fn test_split_is_deterministic() {
        let labels = labels(&["a", "b", "a", "b", "a", "b", "a", "a"]);
        let first = stratified_split(&labels, 0.25, 42);
        let second = stratified_split(&labels, 0.25, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_split_partitions_all_indices() {
        let labels = labels(&["a", "b", "a", "b", "c", "a"]);
        let (train, test) = stratified_split(&labels, 0.3, 7);

        let mut all: Vec<usize> = train.iter().chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..labels.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_tiny_class_stays_in_train() {
        let labels = labels(&["a", "a", "a", "a", "b"]);
        let (train, test) = stratified_split(&labels, 0.2, 42);

        assert!(train.contains(&4), "singleton class must stay in train");
        assert!(!test.contains(&4));
    }
}
