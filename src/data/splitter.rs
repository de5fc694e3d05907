use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::data::record::Record;

/// How much of a table the second half of a split receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitSpec {
    /// Proportion in (0, 1) of rows moved to the second table.
    Fraction(f64),
    /// Absolute row count for the second table, capped at the table size.
    Count(usize),
}

impl SplitSpec {
    /// Rows the second table receives out of `n`.
    fn take(self, n: usize) -> usize {
        match self {
            // negative fractions saturate to 0 through the cast
            SplitSpec::Fraction(f) => ((f * n as f64).round() as usize).min(n),
            SplitSpec::Count(k) => k.min(n),
        }
    }
}

/// Partition `rows` into two disjoint tables with a seeded shuffle.
///
/// The second table receives `round(f * n)` rows for a fraction and
/// `min(k, n)` for a count. Together the two tables hold every input row
/// exactly once, and the same seed reproduces the same partition.
pub fn split(rows: Vec<Record>, spec: SplitSpec, seed: u64) -> (Vec<Record>, Vec<Record>) {
    let mut rows = rows;
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let second = spec.take(rows.len());
    let tail = rows.split_off(rows.len() - second);
    (rows, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn table(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("文章{}", i), format!("题{}", i)))
            .collect()
    }

    #[test]
    fn test_count_split_sizes() {
        let (first, second) = split(table(100), SplitSpec::Count(30), 24601);
        assert_eq!(first.len(), 70);
        assert_eq!(second.len(), 30);
    }

    #[test]
    fn test_fraction_split_rounds() {
        let (first, second) = split(table(101), SplitSpec::Fraction(0.5), 24601);
        assert_eq!(second.len(), 51); // round(50.5)
        assert_eq!(first.len(), 50);
    }

    #[test]
    fn test_count_capped_at_table_size() {
        let (first, second) = split(table(10), SplitSpec::Count(50), 24601);
        assert!(first.is_empty());
        assert_eq!(second.len(), 10);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let rows = table(100);
        let input: HashSet<_> = rows.iter().cloned().collect();
        let (first, second) = split(rows, SplitSpec::Count(40), 24601);

        assert_eq!(first.len() + second.len(), 100);
        let first_set: HashSet<_> = first.into_iter().collect();
        let second_set: HashSet<_> = second.into_iter().collect();
        assert!(first_set.is_disjoint(&second_set));

        let union: HashSet<_> = first_set.union(&second_set).cloned().collect();
        assert_eq!(union, input);
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let (a1, b1) = split(table(100), SplitSpec::Fraction(0.3), 24601);
        let (a2, b2) = split(table(100), SplitSpec::Fraction(0.3), 24601);
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }
}
