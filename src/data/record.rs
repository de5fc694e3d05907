use serde::{Deserialize, Serialize};

/// A single article/title pair.
///
/// `source` is the long-form text to be summarized, `target` the short title
/// the model learns to predict. Field order matches the column order of the
/// written CSV files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub source: String,
    pub target: String,
}

impl Record {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Source length in characters, not bytes.
    pub fn source_len(&self) -> usize {
        self.source.chars().count()
    }

    /// Target length in characters, not bytes.
    pub fn target_len(&self) -> usize {
        self.target.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_count_characters() {
        let record = Record::new("新闻内容", "标题");
        assert_eq!(record.source_len(), 4);
        assert_eq!(record.target_len(), 2);
        assert!(record.source.len() > 4); // bytes, for contrast
    }
}
