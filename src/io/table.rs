use std::fs;
use std::path::Path;

use crate::Result;
use crate::data::record::Record;

/// Write rows as a two-column CSV with a `source,target` header.
///
/// Quoting and escaping follow RFC 4180; no index column is written.
pub fn write_table<P: AsRef<Path>>(path: P, rows: &[Record]) -> Result<()> {
    let path = path.as_ref();

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Read back a table written by [`write_table`].
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.csv");

        let rows = vec![
            Record::new("深市楼市调控再度收紧", "楼市调控"),
            Record::new("内容里有,逗号和\"引号\"", "标题,带逗号"),
            Record::new("多行\n内容", "普通标题"),
        ];

        write_table(&path, &rows).unwrap();
        let read_back = read_table(&path).unwrap();
        assert_eq!(read_back, rows);
    }

    #[test]
    fn test_header_row_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid.csv");
        write_table(&path, &[Record::new("正文", "标题")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("source,target"));
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/test.csv");
        write_table(&path, &[Record::new("正文", "标题")]).unwrap();
        assert!(path.exists());
    }
}
