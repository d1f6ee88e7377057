//! Duplicate detection: sorted run scan, hash counting and brute force.

use crate::containers::Sequence;
use ahash::AHashMap;
use std::hash::Hash;

/// A value occurring more than once, with its number of occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duplicate<T> {
    /// The repeated value
    pub value: T,
    /// Total occurrences, always at least 2
    pub count: usize,
}

impl<T: PartialEq + Clone> Sequence<T> {
    /// Duplicates of an ascending sequence, one entry per run of equal values
    ///
    /// O(n). Equal values must be adjacent; in unsorted input separate runs
    /// of the same value are reported separately.
    pub fn duplicates_sorted(&self) -> Vec<Duplicate<T>> {
        let items = self.as_slice();
        let mut found = Vec::new();
        let mut i = 0;
        while i < items.len() {
            let run = items[i..].iter().take_while(|item| **item == items[i]).count();
            if run > 1 {
                found.push(Duplicate {
                    value: items[i].clone(),
                    count: run,
                });
            }
            i += run;
        }
        found
    }

    /// Duplicates of an unsorted sequence by pairwise comparison
    ///
    /// O(n²) baseline for [`duplicates_hashed`](Self::duplicates_hashed).
    /// Works on a private scratch copy in which counted occurrences are
    /// replaced by a `None` sentinel, so the sequence itself is never
    /// modified. Results follow order of first appearance.
    pub fn duplicates_brute_force(&self) -> Vec<Duplicate<T>> {
        let items = self.as_slice();
        let mut found = Vec::new();
        if items.len() < 2 {
            return found;
        }

        let mut scratch: Vec<Option<T>> = items.iter().cloned().map(Some).collect();
        for i in 0..scratch.len() {
            let Some(current) = scratch[i].take() else {
                continue;
            };
            let mut count = 1;
            for slot in scratch[i + 1..].iter_mut() {
                if slot.as_ref() == Some(&current) {
                    count += 1;
                    *slot = None;
                }
            }
            if count > 1 {
                found.push(Duplicate {
                    value: current,
                    count,
                });
            }
        }
        found
    }
}

impl<T: Eq + Hash + Clone> Sequence<T> {
    /// Duplicates of an unsorted sequence by counting occurrences
    ///
    /// One O(n) pass over a value-to-count table; O(k) extra space for k
    /// distinct values. Results follow order of first appearance.
    pub fn duplicates_hashed(&self) -> Vec<Duplicate<T>> {
        let mut slots: AHashMap<&T, usize> = AHashMap::with_capacity(self.len());
        let mut counts: Vec<(&T, usize)> = Vec::new();
        for item in self.iter() {
            match slots.get(item) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(item, counts.len());
                    counts.push((item, 1));
                }
            }
        }

        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(value, count)| Duplicate {
                value: value.clone(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dup(value: i32, count: usize) -> Duplicate<i32> {
        Duplicate { value, count }
    }

    #[test]
    fn test_duplicates_sorted() {
        let seq = Sequence::from_slice(&[3, 6, 8, 8, 10, 12, 15, 15, 15, 20]).unwrap();
        assert_eq!(seq.duplicates_sorted(), vec![dup(8, 2), dup(15, 3)]);
    }

    #[test]
    fn test_duplicates_sorted_none_and_short() {
        assert!(Sequence::from_slice(&[1, 2, 3]).unwrap().duplicates_sorted().is_empty());
        assert!(Sequence::from_slice(&[1]).unwrap().duplicates_sorted().is_empty());
        assert!(Sequence::<i32>::empty().duplicates_sorted().is_empty());
        assert_eq!(
            Sequence::from_slice(&[4, 4]).unwrap().duplicates_sorted(),
            vec![dup(4, 2)]
        );
    }

    #[test]
    fn test_duplicates_hashed_scenario() {
        let seq = Sequence::from_slice(&[5, 2, 8, 2, 9]).unwrap();
        assert_eq!(seq.duplicates_hashed(), vec![dup(2, 2)]);
    }

    #[test]
    fn test_duplicates_hashed_first_appearance_order() {
        let seq = Sequence::from_slice(&[8, 3, 6, 4, 6, 5, 6, 8, 2, 7]).unwrap();
        assert_eq!(seq.duplicates_hashed(), vec![dup(8, 2), dup(6, 3)]);
    }

    #[test]
    fn test_duplicates_brute_force() {
        let seq = Sequence::from_slice(&[8, 3, 6, 4, 6, 5, 6, 8, 2, 7]).unwrap();
        assert_eq!(seq.duplicates_brute_force(), vec![dup(8, 2), dup(6, 3)]);
        assert_eq!(seq.as_slice(), &[8, 3, 6, 4, 6, 5, 6, 8, 2, 7]);
    }

    #[test]
    fn test_brute_force_handles_sentinel_like_values() {
        // Values that a numeric sentinel would collide with are counted normally.
        let seq = Sequence::from_slice(&[0, -1, 0, -1, -1]).unwrap();
        assert_eq!(seq.duplicates_brute_force(), vec![dup(0, 2), dup(-1, 3)]);
    }

    #[test]
    fn test_strategies_agree() {
        let seq = Sequence::from_slice(&[1, 9, 1, 4, 9, 9, 7, 4, 0]).unwrap();
        let hashed = seq.duplicates_hashed();
        assert_eq!(hashed, seq.duplicates_brute_force());

        let mut sorted: Vec<i32> = seq.iter().copied().collect();
        sorted.sort();
        let mut by_value = hashed.clone();
        by_value.sort_by_key(|d| d.value);
        assert_eq!(
            Sequence::from_slice(&sorted).unwrap().duplicates_sorted(),
            by_value
        );
    }

    #[test]
    fn test_duplicates_of_strings() {
        let mut seq = Sequence::new(0).unwrap();
        for word in ["to", "be", "or", "not", "to", "be"] {
            seq.append(word.to_string()).unwrap();
        }
        let found = seq.duplicates_hashed();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value, "to");
        assert_eq!(found[1].count, 2);
    }
}
