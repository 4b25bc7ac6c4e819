//! Evaluation metrics for classification.
//!
//! Pure functions over true/predicted label sequences: no state, no I/O.
//! [`classification_report`] renders the familiar per-class
//! precision/recall/F1 table; [`confusion_matrix`] returns counts indexed
//! by the sorted label set.

use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Fraction of exact matches between true and predicted labels.
///
/// Returns 0.0 for empty input.
pub fn accuracy(y_true: &[String], y_pred: &[String]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len(), "label sequences differ in length");
    if y_true.is_empty() {
        return 0.0;
    }

    let correct = y_true
        .iter()
        .zip(y_pred)
        .filter(|(a, b)| a == b)
        .count();
    correct as f64 / y_true.len() as f64
}

/// Confusion matrix over the union of observed labels.
///
/// Returns the sorted label list and a square matrix where
/// `matrix[i][j]` counts samples with true label `i` predicted as `j`.
pub fn confusion_matrix(y_true: &[String], y_pred: &[String]) -> (Vec<String>, Vec<Vec<usize>>) {
    assert_eq!(y_true.len(), y_pred.len(), "label sequences differ in length");

    let labels: Vec<String> = y_true
        .iter()
        .chain(y_pred)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let index = |label: &String| labels.binary_search(label).expect("label in label set");

    let mut matrix = vec![vec![0usize; labels.len()]; labels.len()];
    for (t, p) in y_true.iter().zip(y_pred) {
        matrix[index(t)][index(p)] += 1;
    }

    (labels, matrix)
}

/// Per-class precision, recall, F1, and support.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetrics {
    /// Class label.
    pub label: String,
    /// True positives / predicted positives (0 when nothing was predicted).
    pub precision: f64,
    /// True positives / actual positives (0 when the class has no samples).
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Number of true samples of this class.
    pub support: usize,
}

/// Compute per-class metrics from a confusion matrix.
pub fn per_class_metrics(y_true: &[String], y_pred: &[String]) -> Vec<ClassMetrics> {
    let (labels, matrix) = confusion_matrix(y_true, y_pred);

    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let tp = matrix[i][i];
            let predicted: usize = (0..labels.len()).map(|r| matrix[r][i]).sum();
            let actual: usize = matrix[i].iter().sum();

            let precision = if predicted > 0 {
                tp as f64 / predicted as f64
            } else {
                0.0
            };
            let recall = if actual > 0 {
                tp as f64 / actual as f64
            } else {
                0.0
            };
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            ClassMetrics {
                label: label.clone(),
                precision,
                recall,
                f1,
                support: actual,
            }
        })
        .collect()
}

/// Render a text classification report.
///
/// One row per class with precision/recall/F1/support, then accuracy,
/// macro-average, and weighted-average rows.
pub fn classification_report(y_true: &[String], y_pred: &[String]) -> String {
    let metrics = per_class_metrics(y_true, y_pred);
    let total: usize = metrics.iter().map(|m| m.support).sum();

    let width = metrics
        .iter()
        .map(|m| m.label.len())
        .chain(["weighted avg".len()].into_iter())
        .max()
        .unwrap_or(12);

    let mut report = String::new();
    let _ = writeln!(
        report,
        "{:>width$}  precision    recall  f1-score   support",
        "",
    );
    report.push('\n');

    for m in &metrics {
        let _ = writeln!(
            report,
            "{:>width$}  {:>9.2}  {:>8.2}  {:>8.2}  {:>8}",
            m.label, m.precision, m.recall, m.f1, m.support,
        );
    }

    report.push('\n');
    let _ = writeln!(
        report,
        "{:>width$}  {:>9}  {:>8}  {:>8.2}  {:>8}",
        "accuracy",
        "",
        "",
        accuracy(y_true, y_pred),
        total,
    );

    let k = metrics.len().max(1) as f64;
    let macro_p = metrics.iter().map(|m| m.precision).sum::<f64>() / k;
    let macro_r = metrics.iter().map(|m| m.recall).sum::<f64>() / k;
    let macro_f = metrics.iter().map(|m| m.f1).sum::<f64>() / k;
    let _ = writeln!(
        report,
        "{:>width$}  {:>9.2}  {:>8.2}  {:>8.2}  {:>8}",
        "macro avg", macro_p, macro_r, macro_f, total,
    );

    let denom = total.max(1) as f64;
    let wavg = |f: fn(&ClassMetrics) -> f64| {
        metrics
            .iter()
            .map(|m| f(m) * m.support as f64)
            .sum::<f64>()
            / denom
    };
    let _ = writeln!(
        report,
        "{:>width$}  {:>9.2}  {:>8.2}  {:>8.2}  {:>8}",
        "weighted avg",
        wavg(|m| m.precision),
        wavg(|m| m.recall),
        wavg(|m| m.f1),
        total,
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_accuracy() {
        let y_true = labels(&["a", "b", "a", "b"]);
        let y_pred = labels(&["a", "b", "b", "b"]);
        assert!((accuracy(&y_true, &y_pred) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_empty() {
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn test_confusion_matrix() {
        let y_true = labels(&["a", "a", "b", "b"]);
        let y_pred = labels(&["a", "b", "b", "b"]);
        let (names, matrix) = confusion_matrix(&y_true, &y_pred);

        assert_eq!(names, labels(&["a", "b"]));
        assert_eq!(matrix[0], vec![1, 1]); // true "a": one right, one as "b"
        assert_eq!(matrix[1], vec![0, 2]); // true "b": both right
    }

    #[test]
    fn test_per_class_metrics() {
        let y_true = labels(&["a", "a", "b", "b"]);
        let y_pred = labels(&["a", "b", "b", "b"]);
        let metrics = per_class_metrics(&y_true, &y_pred);

        let a = &metrics[0];
        assert!((a.precision - 1.0).abs() < 1e-12);
        assert!((a.recall - 0.5).abs() < 1e-12);
        assert_eq!(a.support, 2);

        let b = &metrics[1];
        assert!((b.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((b.recall - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_with_unpredicted_class() {
        // "c" never gets predicted: precision and f1 are 0, not NaN.
        let y_true = labels(&["a", "c"]);
        let y_pred = labels(&["a", "a"]);
        let metrics = per_class_metrics(&y_true, &y_pred);

        let c = metrics.iter().find(|m| m.label == "c").unwrap();
        assert_eq!(c.precision, 0.0);
        assert_eq!(c.recall, 0.0);
        assert_eq!(c.f1, 0.0);
        assert_eq!(c.support, 1);
    }

    #[test]
    fn test_classification_report_contains_rows() {
        let y_true = labels(&["a", "a", "b", "b"]);
        let y_pred = labels(&["a", "b", "b", "b"]);
        let report = classification_report(&y_true, &y_pred);

        assert!(report.contains("precision"));
        assert!(report.contains("accuracy"));
        assert!(report.contains("macro avg"));
        assert!(report.contains("weighted avg"));
        assert!(report.lines().any(|line| line.trim_start().starts_with('a')));
    }
}
