//! Weighted random choice.

use enchantry_core::random::RandomSource;

/// Something with a selection weight.
pub trait Weighted {
    /// Relative selection weight. Zero is never chosen.
    fn weight(&self) -> u32;
}

/// Picks an index with probability proportional to weight, using a single
/// draw over the cumulative sum.
///
/// Returns `None` when the total weight is zero; no draw is made then.
pub fn choose<T: Weighted, R: RandomSource + ?Sized>(random: &mut R, items: &[T]) -> Option<usize> {
    let total: u64 = items.iter().map(|item| u64::from(item.weight())).sum();
    if total == 0 {
        return None;
    }

    let bound = i32::try_from(total).unwrap_or(i32::MAX);
    let roll = u64::try_from(random.next_int(bound)).unwrap_or(0);

    let mut cumulative = 0u64;
    for (index, item) in items.iter().enumerate() {
        cumulative += u64::from(item.weight());
        if roll < cumulative {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchantry_core::random::{seeded, SequenceRandom};

    struct Entry(u32);

    impl Weighted for Entry {
        fn weight(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_cumulative_boundaries() {
        let items = [Entry(10), Entry(0), Entry(5)];
        let mut random = SequenceRandom::new([0, 9, 10, 14], []);
        assert_eq!(choose(&mut random, &items), Some(0));
        assert_eq!(choose(&mut random, &items), Some(0));
        assert_eq!(choose(&mut random, &items), Some(2));
        assert_eq!(choose(&mut random, &items), Some(2));
        assert_eq!(random.int_draws(), 4);
    }

    #[test]
    fn test_zero_total_draws_nothing() {
        let mut random = SequenceRandom::new([1], []);
        assert_eq!(choose(&mut random, &[Entry(0), Entry(0)]), None);
        assert_eq!(choose::<Entry, _>(&mut random, &[]), None);
        assert_eq!(random.int_draws(), 0);
    }

    #[test]
    fn test_distribution_roughly_proportional() {
        let items = [Entry(10), Entry(1)];
        let mut random = seeded(99);
        let heavy = (0..11_000)
            .filter(|_| choose(&mut random, &items) == Some(0))
            .count();
        assert!((9_500..10_500).contains(&heavy), "heavy picked {heavy} times");
    }
}
