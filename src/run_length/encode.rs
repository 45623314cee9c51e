use super::Run;

/// Encodes a slice as a vector of maximal runs.
///
/// Elements are compared with `==`, so values that are not equal to
/// themselves (like `f64::NAN`) always start a new run.
///
/// ```
/// use runlength::run_length::{encode, Run};
///
/// assert_eq!(encode(&['a', 'a', 'b']), vec![Run::new('a', 2), Run::new('b', 1)]);
/// assert!(encode::<char>(&[]).is_empty());
/// ```
pub fn encode<T: PartialEq + Clone>(values: &[T]) -> Vec<Run<T>> {
    encode_from(values.iter())
        .into_iter()
        .map(|run| {
            let (value, count) = run.into_pair();
            Run::new(value.clone(), count)
        })
        .collect()
}

/// Encodes any sequence of values, taking ownership of them.
///
/// Each run keeps the first element of its stretch; the rest are dropped.
pub fn encode_from<I>(values: I) -> Vec<Run<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut result: Vec<Run<I::Item>> = Vec::new();

    for value in values {
        if let Some(current) = result.last_mut() {
            if current.value == value {
                current.extend();
                continue;
            }
        }
        result.push(Run::new(value, 1));
    }

    result
}

/// Counts the runs in `values` without building them.
///
/// This is always `encode(values).len()`.
pub fn run_count<T: PartialEq>(values: &[T]) -> usize {
    if values.is_empty() {
        return 0;
    }
    1 + values.windows(2).filter(|w| w[0] != w[1]).count()
}
