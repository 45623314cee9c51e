use std::io::Result;

use num_traits::cast;

use super::Run;
use crate::internal::errors::*;

/// Expands runs back into the sequence they encode.
///
/// Fails with `InvalidData` if any run has a count of zero, and with
/// `InvalidInput` if the decoded sequence would be longer than `usize`
/// can index. Nothing is allocated in either case.
///
/// ```
/// use runlength::run_length::{decode, Run};
///
/// let runs = vec![Run::new(1, 1), Run::new(2, 2), Run::new(3, 3)];
/// assert_eq!(decode(&runs).unwrap(), vec![1, 2, 2, 3, 3, 3]);
///
/// assert!(decode(&[Run::new(1, 1), Run::new(2, 0)]).is_err());
/// ```
pub fn decode<T: Clone>(runs: &[Run<T>]) -> Result<Vec<T>> {
    let len = checked_len("decode", runs)?;
    let mut result = Vec::with_capacity(len);

    for run in runs {
        result.extend(run.expand());
    }

    Ok(result)
}

/// Expands owned runs, moving each value into its last copy.
pub fn decode_from<T, I>(runs: I) -> Result<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = Run<T>>,
{
    let runs: Vec<Run<T>> = runs.into_iter().collect();
    let len = checked_len("decode_from", &runs)?;
    let mut result = Vec::with_capacity(len);

    for run in runs {
        let (value, count) = run.into_pair();
        for _ in 1..count {
            result.push(value.clone());
        }
        result.push(value);
    }

    Ok(result)
}

/// The length of the sequence `runs` encodes, or `None` if it overflows
/// a `u64`.
pub fn decoded_len<T>(runs: &[Run<T>]) -> Option<u64> {
    runs.iter()
        .try_fold(0u64, |total, run| total.checked_add(run.count()))
}

/// Whether `runs` could have come out of the encoder: every count is
/// positive and no two neighbors hold equal values.
pub fn is_maximal<T: PartialEq>(runs: &[Run<T>]) -> bool {
    runs.iter().all(|run| run.count() > 0)
        && runs.windows(2).all(|w| w[0].value() != w[1].value())
}

fn checked_len<T>(who: &str, runs: &[Run<T>]) -> Result<usize> {
    if let Some(index) = runs.iter().position(|run| run.count() == 0) {
        return zero_count(who, index);
    }

    match decoded_len(runs).and_then(cast::<u64, usize>) {
        Some(len) => Ok(len),
        None => too_long(who),
    }
}
