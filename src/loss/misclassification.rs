/// Counts the indices where `labels[i] != results[i]`.
///
/// The comparison is symmetric, so argument order does not matter.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn calc_error(labels: &[i32], results: &[i32]) -> usize {
    assert_eq!(labels.len(), results.len(), "labels and results must have equal length");
    labels.iter().zip(results).filter(|(l, r)| l != r).count()
}
