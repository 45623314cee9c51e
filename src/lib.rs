//! Run-length encoding for Rust.
//!
//! A run-length encoding collapses each stretch of equal, consecutive
//! values into a single [run](run_length/struct.Run.html): the value
//! and how many times it repeats. So far we have:
//!
//!   - an [encoder](run_length/fn.encode.html) over slices of anything
//!     comparable with `==`, and an owning variant for iterators;
//!   - a [decoder](run_length/fn.decode.html) that rejects runs of
//!     length zero instead of silently dropping them; and
//!   - [space accounting](trait.SpaceUsage.html) for comparing encoded
//!     and raw footprints.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! runlength = "0.1.0"
//! ```
//!
//! ```rust
//! use runlength::{decode, encode, Run};
//!
//! let runs = encode(&[1, 1, 3, 1]);
//! assert_eq!(runs, vec![Run::new(1, 2), Run::new(3, 1), Run::new(1, 1)]);
//! assert_eq!(decode(&runs).unwrap(), vec![1, 1, 3, 1]);
//! ```

#![warn(missing_docs)]

mod internal;

#[macro_use]
mod space_usage;
pub use crate::space_usage::SpaceUsage;

pub mod run_length;
pub use crate::run_length::{
    decode, decode_from, decoded_len, encode, encode_from, is_maximal, run_count, Run,
};
