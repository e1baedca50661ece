//! The list of candidate numbers a round is played on
//!
//! A `NumberList` holds unique integers in ascending order. It is generated once per
//! round and only ever shrinks afterwards, through `remove` and `clamp`.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Sorted set of unique integers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberList {
    numbers: Vec<i32>,
}

impl NumberList {
    /// Draw `size` distinct numbers uniformly from `lower..=upper`, sorted ascending
    ///
    /// # Panics
    /// Panics if the range holds fewer than `size` numbers. `Settings` rejects such
    /// configurations before any list is generated.
    ///
    /// # Examples
    /// ```
    /// use lucky_number::core::NumberList;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let list = NumberList::generate(10, 0, 100, &mut rng);
    /// assert_eq!(list.len(), 10);
    /// assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
    /// ```
    pub fn generate<R: Rng + ?Sized>(size: usize, lower: i32, upper: i32, rng: &mut R) -> Self {
        let span = (i64::from(upper) - i64::from(lower) + 1) as usize;

        // lower + offset <= upper, so the wrapping add lands on the real value
        let mut numbers: Vec<i32> = rand::seq::index::sample(rng, span, size)
            .into_iter()
            .map(|offset| lower.wrapping_add(offset as i32))
            .collect();
        numbers.sort_unstable();

        Self { numbers }
    }

    /// Build a list from arbitrary values, sorting and dropping duplicates
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = i32>) -> Self {
        let mut numbers: Vec<i32> = values.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        Self { numbers }
    }

    /// Check whether `number` is in the list
    #[inline]
    #[must_use]
    pub fn contains(&self, number: i32) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Remove `number` if present
    ///
    /// Returns whether anything was removed. Removing an absent value leaves the list
    /// untouched.
    pub fn remove(&mut self, number: i32) -> bool {
        match self.numbers.binary_search(&number) {
            Ok(index) => {
                self.numbers.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Pick one element uniformly at random, or `None` for an empty list
    pub fn random_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i32> {
        self.numbers.choose(rng).copied()
    }

    /// Keep only the numbers within `radius` of `pivot` (inclusive on both ends)
    pub fn clamp(&mut self, pivot: i32, radius: u32) {
        self.numbers.retain(|&n| n.abs_diff(pivot) <= radius);
    }

    /// Number of elements left
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Smallest remaining number
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.numbers.first().copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.numbers
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_fills_whole_range_when_size_equals_span() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = NumberList::generate(11, -5, 5, &mut rng);
        assert_eq!(list.as_slice(), &(-5..=5).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn generate_handles_extreme_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let list = NumberList::generate(5, i32::MIN, i32::MAX, &mut rng);
        assert_eq!(list.len(), 5);
        assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn from_values_sorts_and_dedups() {
        let list = NumberList::from_values([9, 3, 3, 7, 1]);
        assert_eq!(list.as_slice(), &[1, 3, 7, 9]);
    }

    #[test]
    fn contains_checks_membership() {
        let list = NumberList::from_values([1, 5, 9]);
        assert!(list.contains(5));
        assert!(!list.contains(4));
    }

    #[test]
    fn remove_present_value() {
        let mut list = NumberList::from_values([1, 5, 9]);
        assert!(list.remove(5));
        assert_eq!(list.as_slice(), &[1, 9]);
    }

    #[test]
    fn remove_absent_value_is_noop() {
        let mut list = NumberList::from_values([1, 5, 9]);
        let before = list.clone();
        assert!(!list.remove(4));
        assert_eq!(list, before);

        // Twice in a row is also fine
        list.remove(5);
        assert!(!list.remove(5));
        assert_eq!(list.as_slice(), &[1, 9]);
    }

    #[test]
    fn clamp_keeps_inclusive_window() {
        let mut list = NumberList::from_values([10, 19, 20, 30, 40, 41, 50]);
        list.clamp(30, 10);
        assert_eq!(list.as_slice(), &[20, 30, 40]);
    }

    #[test]
    fn clamp_with_zero_radius_keeps_only_pivot() {
        let mut list = NumberList::from_values([1, 2, 3]);
        list.clamp(2, 0);
        assert_eq!(list.as_slice(), &[2]);
    }

    #[test]
    fn random_choice_on_empty_list() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(NumberList::default().random_choice(&mut rng), None);
    }

    #[test]
    fn display_matches_bracketed_format() {
        assert_eq!(NumberList::from_values([3, 1, 2]).to_string(), "[1, 2, 3]");
        assert_eq!(NumberList::default().to_string(), "[]");
    }

    proptest! {
        #[test]
        fn generated_list_is_sorted_unique_and_in_range(
            lower in -1000i32..1000,
            extra in 0i32..200,
            size in 1usize..50,
            seed in any::<u64>(),
        ) {
            let upper = lower + size as i32 + extra;
            let mut rng = StdRng::seed_from_u64(seed);
            let list = NumberList::generate(size, lower, upper, &mut rng);

            prop_assert_eq!(list.len(), size);
            prop_assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(list.as_slice().iter().all(|&n| (lower..=upper).contains(&n)));
        }

        #[test]
        fn secret_is_always_in_list(seed in any::<u64>(), size in 1usize..30) {
            let mut rng = StdRng::seed_from_u64(seed);
            let list = NumberList::generate(size, 0, 100, &mut rng);
            let secret = list.random_choice(&mut rng);
            prop_assert!(secret.is_some_and(|s| list.contains(s)));
        }

        #[test]
        fn clamp_yields_subset_within_radius(
            values in proptest::collection::vec(-200i32..200, 0..60),
            pivot in -200i32..200,
            radius in 0u32..50,
        ) {
            let original = NumberList::from_values(values);
            let mut clamped = original.clone();
            clamped.clamp(pivot, radius);

            prop_assert!(clamped.as_slice().iter().all(|&n| original.contains(n)));
            prop_assert!(clamped.as_slice().iter().all(|&n| n.abs_diff(pivot) <= radius));
            prop_assert!(clamped.as_slice().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
