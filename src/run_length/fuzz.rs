extern crate runlength;

use runlength::run_length::{decode, decoded_len, encode, is_maximal, run_count};

fn main() {
    loop {
        afl::fuzz!(|data: &[u8]| {
            // Fold the bytes into a small alphabet so long runs show up.
            let values: Vec<u8> = data.iter().map(|byte| byte % 4).collect();

            let runs = encode(&values);
            assert!(is_maximal(&runs));
            assert_eq!(runs.len(), run_count(&values));
            assert_eq!(decoded_len(&runs), Some(values.len() as u64));
            assert_eq!(decode(&runs).unwrap(), values);
        });
    }
}
