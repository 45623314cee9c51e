//! Run-length encoding of arbitrary sequences.
//!
//! A sequence is encoded as a vector of [`Run`]s, each holding a value
//! and the number of times it repeats consecutively. Encoded vectors
//! are *maximal*: no two adjacent runs hold equal values.
//!
//! ```
//! use runlength::run_length::{decode, encode, Run};
//!
//! let runs = encode(&[1, 1, 3, 1]);
//! assert_eq!(runs, vec![Run::new(1, 2), Run::new(3, 1), Run::new(1, 1)]);
//!
//! assert_eq!(decode(&runs).unwrap(), vec![1, 1, 3, 1]);
//! ```
//!
//! Decoding rejects runs with a count of zero, since the encoder never
//! produces them.

use std::iter::{self, Repeat, Take};

use crate::SpaceUsage;

mod encode;
pub use self::encode::{encode, encode_from, run_count};

mod decode;
pub use self::decode::{decode, decode_from, decoded_len, is_maximal};

/// A value together with the number of times it repeats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Run<T> {
    value: T,
    count: u64,
}

impl<T> Run<T> {
    /// Creates a run of `count` copies of `value`.
    ///
    /// A count of zero is allowed here, but [`decode`] refuses it.
    pub fn new(value: T, count: u64) -> Self {
        Run { value, count }
    }

    /// The repeated value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// How many times the value repeats.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Splits the run into its value and count.
    pub fn into_pair(self) -> (T, u64) {
        (self.value, self.count)
    }

    /// Iterates over `count` copies of the value.
    ///
    /// # Panics
    ///
    /// If the count does not fit in a `usize`.
    pub fn expand(&self) -> Take<Repeat<T>>
    where
        T: Clone,
    {
        let count = num_traits::cast::<u64, usize>(self.count)
            .expect("Run::expand: count does not fit in usize");
        iter::repeat(self.value.clone()).take(count)
    }

    // Lengthens the run by one element.
    fn extend(&mut self) {
        self.count += 1;
    }
}

impl<T> From<(T, u64)> for Run<T> {
    fn from((value, count): (T, u64)) -> Self {
        Run::new(value, count)
    }
}

impl<T> From<Run<T>> for (T, u64) {
    fn from(run: Run<T>) -> Self {
        run.into_pair()
    }
}

impl<T: SpaceUsage> SpaceUsage for Run<T> {
    #[inline]
    fn is_stack_only() -> bool {
        T::is_stack_only()
    }

    fn heap_bytes(&self) -> usize {
        self.value.heap_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;
    use std::mem::size_of;

    fn runs(pairs: &[(u32, u64)]) -> Vec<Run<u32>> {
        pairs.iter().cloned().map(Run::from).collect()
    }

    #[test]
    fn all_distinct() {
        assert_eq!(encode(&[1u32, 2, 3]), runs(&[(1, 1), (2, 1), (3, 1)]));
    }

    #[test]
    fn all_the_same() {
        assert_eq!(encode(&[1u32, 1, 1]), runs(&[(1, 3)]));
    }

    #[test]
    fn value_comes_back() {
        assert_eq!(encode(&[1u32, 1, 3, 1]), runs(&[(1, 2), (3, 1), (1, 1)]));
    }

    #[test]
    fn decoding() {
        assert_eq!(
            decode(&runs(&[(1, 1), (2, 2), (3, 3)])).unwrap(),
            vec![1, 2, 2, 3, 3, 3]
        );
    }

    #[test]
    fn empty() {
        let nothing: [u32; 0] = [];
        assert_eq!(encode(&nothing), Vec::<Run<u32>>::new());
        assert_eq!(decode(&encode(&nothing)).unwrap(), Vec::<u32>::new());
        assert_eq!(decode::<u32>(&[]).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn strings_by_value() {
        let words = vec!["a".to_owned(), String::from("a"), "b".to_owned()];
        let encoded = encode(&words);
        assert_eq!(
            encoded,
            vec![Run::new("a".to_owned(), 2), Run::new("b".to_owned(), 1)]
        );
        assert_eq!(decode(&encoded).unwrap(), words);
    }

    #[test]
    fn floats_use_partial_eq() {
        let nan = f64::NAN;
        let encoded = encode(&[0.5, 0.5, nan, nan]);
        assert_eq!(encoded.len(), 3);
        assert_eq!(encoded[0], Run::new(0.5, 2));
        assert_eq!(encoded[1].count(), 1);
        assert_eq!(encoded[2].count(), 1);
    }

    #[test]
    fn pairs() {
        let run = Run::from(('x', 4));
        assert_eq!(*run.value(), 'x');
        assert_eq!(run.count(), 4);
        assert_eq!(run.into_pair(), ('x', 4));

        let pair: (char, u64) = Run::new('y', 2).into();
        assert_eq!(pair, ('y', 2));

        let set: HashSet<Run<char>> = vec![Run::new('a', 1), Run::new('a', 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn expand() {
        assert_eq!(Run::new(7u8, 3).expand().collect::<Vec<_>>(), vec![7, 7, 7]);
        assert_eq!(Run::new(7u8, 0).expand().count(), 0);
    }

    #[test]
    fn space_usage() {
        assert!(Run::<u32>::is_stack_only());
        assert!(!Run::<Vec<u32>>::is_stack_only());
        assert_eq!(size_of::<Run<u64>>(), Run::new(0u64, 1).total_bytes());

        let run = Run::new(Vec::<u64>::with_capacity(4), 2);
        assert_eq!(32, run.heap_bytes());
    }

    #[test]
    fn encoded_is_smaller_on_long_runs() {
        let raw = vec![9u64; 1000];
        let encoded = encode(&raw);
        assert!(encoded.heap_bytes() < raw.heap_bytes());
    }

    #[quickcheck]
    fn qc_round_trip(values: Vec<u8>) -> bool {
        decode(&encode(&values)).unwrap() == values
    }

    #[quickcheck]
    fn qc_round_trip_owned(values: Vec<String>) -> bool {
        let encoded = encode_from(values.clone());
        decode_from(encoded).unwrap() == values
    }

    #[quickcheck]
    fn qc_maximal(values: Vec<u8>) -> bool {
        let encoded = encode(&values);
        encoded.windows(2).all(|w| w[0].value() != w[1].value()) && is_maximal(&encoded)
    }

    #[quickcheck]
    fn qc_length_conserved(values: Vec<u8>) -> bool {
        let encoded = encode(&values);
        let total: u64 = encoded.iter().map(Run::count).sum();
        total == values.len() as u64 && decoded_len(&encoded) == Some(total)
    }

    #[quickcheck]
    fn qc_run_count(values: Vec<bool>) -> bool {
        run_count(&values) == encode(&values).len()
    }

    #[quickcheck]
    fn qc_slice_matches_owned(values: Vec<i16>) -> bool {
        encode(&values) == encode_from(values.iter().cloned())
    }
}
