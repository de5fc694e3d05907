use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::record::Record;
use crate::{Result, SumprepError};

/// Raw corpus layouts this tool understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaKind {
    /// Headerless seven-field CSV dump of the news2016zh corpus
    #[serde(rename = "news2016zh")]
    News2016Zh,
    /// LCSTS short-text pairs as a JSON array of objects
    #[serde(rename = "lcsts")]
    Lcsts,
}

impl FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news2016zh" | "news" => Ok(SchemaKind::News2016Zh),
            "lcsts" | "lcsts_data" => Ok(SchemaKind::Lcsts),
            _ => Err(format!("Invalid schema kind: {}. Use news2016zh or lcsts", s)),
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::News2016Zh => write!(f, "news2016zh"),
            SchemaKind::Lcsts => write!(f, "lcsts"),
        }
    }
}

impl SchemaKind {
    /// Infer the schema from the file name.
    ///
    /// The two supported corpus dumps keep their upstream names, so a
    /// substring match is enough. Callers that renamed their files should
    /// pass an explicit kind instead.
    pub fn detect(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if name.contains("news2016zh") {
            Ok(SchemaKind::News2016Zh)
        } else if name.contains("lcsts_data") {
            Ok(SchemaKind::Lcsts)
        } else {
            Err(SumprepError::UnrecognizedSchema {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Load a raw corpus file into (source, target) rows.
pub fn load(path: &Path, kind: SchemaKind) -> Result<Vec<Record>> {
    let rows = match kind {
        SchemaKind::News2016Zh => load_news2016zh(path)?,
        SchemaKind::Lcsts => load_lcsts(path)?,
    };

    log::info!("Loaded {} rows from {} ({})", rows.len(), path.display(), kind);
    Ok(rows)
}

// Positional layout of a news2016zh row.
const NEWS_TITLE_FIELD: usize = 3;
const NEWS_CONTENT_FIELD: usize = 6;

/// news2016zh rows are headerless CSV with seven positional fields:
/// news_id, keywords, desc, title, source, time, content. Each cell still
/// carries the `"<field>": "` markup of the JSON lines the dump was
/// flattened from.
fn load_news2016zh(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        let title = strip_field_markup(row.get(NEWS_TITLE_FIELD).unwrap_or(""), "title");
        let content = strip_field_markup(row.get(NEWS_CONTENT_FIELD).unwrap_or(""), "content");
        rows.push(Record::new(content, title));
    }
    Ok(rows)
}

/// Remove the residual field markup from a news2016zh cell, turning
/// `"title": "..."` into the bare text. The closing quote survives as the
/// final character of every cell.
fn strip_field_markup(cell: &str, field: &str) -> String {
    let marker = format!("\"{}\": \"", field);
    let mut text = cell.replace(&marker, "");
    text.pop();
    text
}

#[derive(Deserialize)]
struct LcstsEntry {
    title: String,
    content: String,
}

/// lcsts_data.json is one JSON array of {title, content} objects. Titles
/// carry stray hashtag markers and curly quotes that are not part of the
/// summary text.
fn load_lcsts(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    let entries: Vec<LcstsEntry> = serde_json::from_reader(BufReader::new(file))?;

    let rows = entries
        .into_iter()
        .map(|entry| {
            let title: String = entry
                .title
                .chars()
                .filter(|c| !matches!(c, '#' | '“' | '”'))
                .collect();
            Record::new(entry.content, title)
        })
        .collect();
    Ok(rows)
}
