pub mod zh;

pub use zh::{CharTableConverter, ZhNormalizer};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::data::record::Record;
use crate::{Result, SumprepError};

/// Converts between script variants of the same language.
///
/// Implementations must be pure: the same input always yields the same
/// output.
pub trait ScriptConverter: Send + Sync {
    fn convert(&self, text: &str) -> String;
}

/// Language-specific text cleanup applied after script conversion.
///
/// Returning `None` marks the text as unusable and drops the whole row.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Option<String>;
}

/// Converter that passes text through untouched.
pub struct IdentityConverter;

impl ScriptConverter for IdentityConverter {
    fn convert(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Look up the normalizer registered for a language tag.
pub fn normalizer_for(lang: &str) -> Result<Box<dyn Normalizer>> {
    match lang {
        "zh" => Ok(Box::new(ZhNormalizer::new())),
        _ => Err(SumprepError::UnsupportedLanguage {
            lang: lang.to_string(),
        }),
    }
}

/// Look up the script converter for a language tag. Languages without script
/// variants fall back to the identity converter.
pub fn converter_for(lang: &str) -> Box<dyn ScriptConverter> {
    match lang {
        "zh" => Box::new(CharTableConverter::default()),
        _ => Box::new(IdentityConverter),
    }
}

/// Apply script conversion and normalization to every cell of every row.
///
/// Transformation is pointwise, so rows fan out across the rayon pool and
/// the collected output keeps the input order. Rows where either cell fails
/// to normalize are dropped.
pub fn transform_table(
    rows: Vec<Record>,
    converter: &dyn ScriptConverter,
    normalizer: &dyn Normalizer,
) -> Vec<Record> {
    let before = rows.len();

    let pb = ProgressBar::new(before as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows transformed")
            .unwrap()
            .progress_chars("#>-"),
    );

    let transformed: Vec<Record> = rows
        .into_par_iter()
        .filter_map(|row| {
            let source = normalizer.normalize(&converter.convert(&row.source));
            let target = normalizer.normalize(&converter.convert(&row.target));
            pb.inc(1);
            match (source, target) {
                (Some(source), Some(target)) => Some(Record { source, target }),
                _ => None,
            }
        })
        .collect();

    pb.finish_and_clear();
    log::info!("Transform kept {} of {} rows", transformed.len(), before);
    transformed
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseConverter;

    impl ScriptConverter for UppercaseConverter {
        fn convert(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    struct RejectMarked;

    impl Normalizer for RejectMarked {
        fn normalize(&self, text: &str) -> Option<String> {
            if text.contains('!') {
                None
            } else {
                Some(text.to_string())
            }
        }
    }

    fn table() -> Vec<Record> {
        vec![
            Record::new("abc", "t1"),
            Record::new("bad!", "t2"),
            Record::new("def", "t3"),
        ]
    }

    #[test]
    fn test_conversion_applied_to_both_cells() {
        let rows = transform_table(
            vec![Record::new("abc", "xyz")],
            &UppercaseConverter,
            &RejectMarked,
        );
        assert_eq!(rows, vec![Record::new("ABC", "XYZ")]);
    }

    #[test]
    fn test_failed_rows_dropped_order_preserved() {
        let rows = transform_table(table(), &IdentityConverter, &RejectMarked);
        assert_eq!(rows, vec![Record::new("abc", "t1"), Record::new("def", "t3")]);
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(normalizer_for("klingon").is_err());
        assert!(normalizer_for("zh").is_ok());
    }
}
