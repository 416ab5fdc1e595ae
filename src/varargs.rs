//! Minimum of a variable number of arguments
//!
//! `min` checks for an empty slice at runtime. `min_of` makes the first
//! argument part of the signature so the empty case cannot be written.

use crate::error::{IdiomError, Result};

pub fn min(args: &[i32]) -> Result<i32> {
    args.iter()
        .copied()
        .min()
        .ok_or_else(|| IdiomError::invalid_argument("at least one argument is required"))
}

pub fn min_of(first: i32, rest: &[i32]) -> i32 {
    rest.iter().copied().fold(first, i32::min)
}

/// `min!()` is an error, `min!(a, b, ...)` is the smallest argument.
#[macro_export]
macro_rules! min {
    () => {
        $crate::varargs::min(&[])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::varargs::min(&[$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_min_basic() {
        assert_eq!(min(&[1, 2, 3]).unwrap(), 1);
        assert_eq!(min(&[3, -7, 0]).unwrap(), -7);
        assert_eq!(min(&[42]).unwrap(), 42);
    }

    #[test]
    fn test_min_empty_is_invalid_argument() {
        match min(&[]) {
            Err(IdiomError::InvalidArgument(msg)) => {
                assert_eq!(msg, "at least one argument is required")
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_min_of() {
        assert_eq!(min_of(5, &[]), 5);
        assert_eq!(min_of(5, &[9, 2, 7]), 2);
        assert_eq!(min_of(i32::MIN, &[i32::MAX]), i32::MIN);
    }

    #[test]
    fn test_min_macro() {
        assert_eq!(crate::min!(1, 2, 3).unwrap(), 1);
        assert_eq!(crate::min!(8, -1,).unwrap(), -1);
        assert!(matches!(crate::min!(), Err(IdiomError::InvalidArgument(_))));
    }

    proptest! {
        #[test]
        fn test_min_is_member_and_lower_bound(values in prop::collection::vec(any::<i32>(), 1..100)) {
            let smallest = min(&values).unwrap();

            prop_assert!(values.contains(&smallest));
            prop_assert!(values.iter().all(|&v| smallest <= v));
        }

        #[test]
        fn test_min_of_agrees_with_min(first in any::<i32>(), rest in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut all = vec![first];
            all.extend_from_slice(&rest);

            prop_assert_eq!(min_of(first, &rest), min(&all).unwrap());
        }
    }
}
