use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::data::record::Record;

/// Draw up to `target_size` rows without replacement.
///
/// With no target size the table passes through unchanged. The draw is gated
/// by `seed`, so repeated calls over the same table yield the same subset.
pub fn sample(rows: Vec<Record>, target_size: Option<usize>, seed: u64) -> Vec<Record> {
    let Some(size) = target_size else {
        return rows;
    };
    let size = size.min(rows.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = rows;
    rows.shuffle(&mut rng);
    rows.truncate(size);

    log::info!("Data Size: {}", rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("文章{}", i), format!("题{}", i)))
            .collect()
    }

    #[test]
    fn test_no_target_size_passes_through() {
        let rows = table(10);
        assert_eq!(sample(rows.clone(), None, 24601), rows);
    }

    #[test]
    fn test_samples_requested_count() {
        let sampled = sample(table(100), Some(10), 24601);
        assert_eq!(sampled.len(), 10);
    }

    #[test]
    fn test_target_capped_at_table_size() {
        let sampled = sample(table(5), Some(50), 24601);
        assert_eq!(sampled.len(), 5);
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let first = sample(table(100), Some(20), 24601);
        let second = sample(table(100), Some(20), 24601);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = sample(table(100), Some(20), 24601);
        let second = sample(table(100), Some(20), 7);
        assert_ne!(first, second);
    }

    #[test]
    fn test_no_replacement() {
        let sampled = sample(table(100), Some(50), 24601);
        let unique: std::collections::HashSet<_> = sampled.iter().collect();
        assert_eq!(unique.len(), sampled.len());
    }
}
