#![forbid(unsafe_code)]

//! Permutation checks.

/// Whether `candidate` contains exactly the elements of `original`, each as
/// many times as it occurs there, in any order.
///
/// Quadratic, but needs only `PartialEq`, so it works for any item type a
/// host stores in a [`ReorderableList`](crate::ReorderableList).
#[must_use]
pub fn is_permutation_of<T: PartialEq>(original: &[T], candidate: &[T]) -> bool {
    if original.len() != candidate.len() {
        return false;
    }
    let mut claimed = vec![false; candidate.len()];
    original.iter().all(|item| {
        let slot = candidate
            .iter()
            .enumerate()
            .position(|(index, other)| !claimed[index] && other == item);
        match slot {
            Some(index) => {
                claimed[index] = true;
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::is_permutation_of;

    #[test]
    fn reordering_is_a_permutation() {
        assert!(is_permutation_of(&[1, 2, 3], &[3, 1, 2]));
        assert!(is_permutation_of::<u8>(&[], &[]));
    }

    #[test]
    fn duplicates_must_match_in_count() {
        assert!(is_permutation_of(&[1, 1, 2], &[1, 2, 1]));
        assert!(!is_permutation_of(&[1, 1, 2], &[1, 2, 2]));
    }

    #[test]
    fn length_mismatch_is_not_a_permutation() {
        assert!(!is_permutation_of(&[1, 2], &[1, 2, 2]));
    }
}
