//! Sliding-window splitter
//!
//! Generates every contiguous fixed-length window (k-mer) of a sequence in
//! ascending offset order. Windows are zero-copy slices of the input.

use thiserror::Error;

/// Errors that can occur while splitting a sequence into windows.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("window length must be at least 1, got {length}")]
    InvalidLength { length: usize },
}

pub type SplitResult<T> = Result<T, SplitError>;

/// All windows of `length` in `seq` together with their byte offsets,
/// in strictly increasing offset order.
///
/// A sequence shorter than `length` yields an empty vector, not an error.
/// Inputs are expected to be ASCII sequence data; a window that would cut a
/// multi-byte character is skipped rather than panicking.
pub fn windows(seq: &str, length: usize) -> SplitResult<Vec<(usize, &str)>> {
    if length == 0 {
        return Err(SplitError::InvalidLength { length });
    }
    if length > seq.len() {
        log::debug!(
            "sequence of {} bytes is shorter than window length {}, no windows",
            seq.len(),
            length
        );
        return Ok(Vec::new());
    }

    let mut words = Vec::with_capacity(seq.len() - length + 1);
    for i in 0..=seq.len() - length {
        if let Some(word) = seq.get(i..i + length) {
            words.push((i, word));
        }
    }
    Ok(words)
}

/// All windows of `length` in `seq`, content only.
///
/// `split(s, L)[i]` equals `&s[i..i + L]` for ASCII input.
pub fn split(seq: &str, length: usize) -> SplitResult<Vec<&str>> {
    Ok(windows(seq, length)?.into_iter().map(|(_, word)| word).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_example() {
        let words = split("ACGTACGT", 4).unwrap();
        assert_eq!(words, vec!["ACGT", "CGTA", "GTAC", "TACG", "ACGT"]);
    }

    #[test]
    fn test_window_offsets() {
        let words = windows("ACGTACGT", 4).unwrap();
        let offsets: Vec<usize> = words.iter().map(|(i, _)| *i).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_length_is_invalid() {
        assert!(matches!(
            split("ACGT", 0),
            Err(SplitError::InvalidLength { length: 0 })
        ));
    }

    #[test]
    fn test_length_longer_than_sequence() {
        assert!(split("ACG", 4).unwrap().is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        assert!(split("", 3).unwrap().is_empty());
    }

    #[test]
    fn test_length_equal_to_sequence() {
        assert_eq!(split("ACGT", 4).unwrap(), vec!["ACGT"]);
    }

    proptest! {
        #[test]
        fn prop_window_count_and_content(seq in "[ACGT]{0,64}", length in 1usize..12) {
            let words = split(&seq, length).unwrap();
            if length > seq.len() {
                prop_assert!(words.is_empty());
            } else {
                prop_assert_eq!(words.len(), seq.len() - length + 1);
                for (i, word) in words.iter().enumerate() {
                    prop_assert_eq!(*word, &seq[i..i + length]);
                }
            }
        }

        #[test]
        fn prop_split_is_deterministic(seq in "[ACGT]{0,64}", length in 1usize..12) {
            prop_assert_eq!(split(&seq, length).unwrap(), split(&seq, length).unwrap());
        }
    }
}
