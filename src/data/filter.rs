use crate::config::LengthBounds;
use crate::data::record::Record;

/// Keep only rows whose source and target lengths fall inside `bounds`.
///
/// Lengths are character counts and both bound checks are inclusive. Row
/// order is preserved.
pub fn filter_by_length(rows: Vec<Record>, bounds: &LengthBounds) -> Vec<Record> {
    let before = rows.len();
    log::info!("Before clean, data size is: {}", before);

    let kept: Vec<Record> = rows
        .into_iter()
        .filter(|row| {
            let inp = row.source_len();
            let tar = row.target_len();
            bounds.min_source_len <= inp
                && inp <= bounds.max_source_len
                && bounds.min_target_len <= tar
                && tar <= bounds.max_target_len
        })
        .collect();

    log::info!("After clean, data size is: {}", kept.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> LengthBounds {
        LengthBounds {
            min_source_len: 4,
            max_source_len: 8,
            min_target_len: 2,
            max_target_len: 4,
        }
    }

    fn row(source_chars: usize, target_chars: usize) -> Record {
        Record::new("长".repeat(source_chars), "短".repeat(target_chars))
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let rows = vec![row(4, 2), row(8, 4), row(6, 3)];
        let kept = filter_by_length(rows.clone(), &bounds());
        assert_eq!(kept, rows);
    }

    #[test]
    fn test_out_of_bounds_rows_dropped() {
        let rows = vec![
            row(3, 3),  // source too short
            row(9, 3),  // source too long
            row(6, 1),  // target too short
            row(6, 5),  // target too long
            row(6, 3),  // in range
        ];
        let kept = filter_by_length(rows, &bounds());
        assert_eq!(kept, vec![row(6, 3)]);
    }

    #[test]
    fn test_order_preserved() {
        let rows = vec![row(5, 2), row(7, 4), row(4, 3)];
        let kept = filter_by_length(rows.clone(), &bounds());
        assert_eq!(kept, rows);
    }

    #[test]
    fn test_lengths_are_characters_not_bytes() {
        // 6 CJK characters are 18 bytes; byte-based filtering would drop it
        let rows = vec![row(6, 3)];
        let kept = filter_by_length(rows, &bounds());
        assert_eq!(kept.len(), 1);
    }
}
