use std::fs;
use std::path::Path;

use chrono::Local;
use colored::*;

use crate::config::PrepConfig;
use crate::data::loader::{self, SchemaKind};
use crate::data::record::Record;
use crate::data::splitter::SplitSpec;
use crate::data::{filter, sampler, splitter};
use crate::io::report::{self, InputStats, RunSummary};
use crate::io::table::write_table;
use crate::transform::{converter_for, normalizer_for, transform_table};
use crate::{Result, SumprepError};

/// Load, filter, sample and transform one raw corpus file.
pub fn prepare_file(
    path: &Path,
    config: &PrepConfig,
    target_size: Option<usize>,
    stats: &mut InputStats,
) -> Result<Vec<Record>> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    println!("\n{}", format!("Processing raw data - {}...", name).bright_cyan());

    let kind = match config.schema {
        Some(kind) => kind,
        None => SchemaKind::detect(path)?,
    };

    let rows = loader::load(path, kind)?;
    stats.loaded_rows = rows.len();

    let rows = filter::filter_by_length(rows, &config.bounds);
    stats.filtered_rows = rows.len();

    let rows = sampler::sample(rows, target_size, config.seed);

    println!(
        "{}",
        format!("Converting script and normalizing {} rows...", rows.len()).bright_yellow()
    );
    let converter = converter_for(&config.lang);
    let normalizer = normalizer_for(&config.lang)?;
    let rows = transform_table(rows, converter.as_ref(), normalizer.as_ref());
    stats.transformed_rows = rows.len();

    Ok(rows)
}

/// Run the full preparation pipeline and write the train/valid/test splits.
pub fn run(config: &PrepConfig) -> Result<RunSummary> {
    config.validate()?;

    let mut inputs = Vec::new();

    // Without a held-out test file the test set is carved from the training
    // data later, so the split budget is doubled up front.
    let (held_out, test_budget) = match &config.test_file {
        Some(path) => {
            let mut stats = InputStats::for_path(path);
            let table = prepare_file(path, config, Some(config.test_size), &mut stats)?;
            inputs.push(stats);
            if table.is_empty() {
                return Err(SumprepError::EmptyResult {
                    context: format!("after preparing test file {}", path.display()),
                });
            }
            let budget = table.len();
            (Some(table), budget)
        }
        None => (None, config.test_size * 2),
    };

    let mut stats = InputStats::for_path(&config.train_file);
    let prepared = prepare_file(&config.train_file, config, config.train_size, &mut stats)?;
    inputs.push(stats);
    if prepared.is_empty() {
        return Err(SumprepError::EmptyResult {
            context: format!("after preparing train file {}", config.train_file.display()),
        });
    }

    let (train, valid_full) = splitter::split(prepared, SplitSpec::Count(test_budget), config.seed);
    let (valid, test) = match held_out {
        Some(table) => (valid_full, table),
        // carve the final test set out of the validation half
        None => splitter::split(valid_full, SplitSpec::Fraction(0.5), config.seed),
    };

    fs::create_dir_all(&config.output_dir)?;
    write_table(config.output_dir.join("train.csv"), &train)?;
    write_table(config.output_dir.join("valid.csv"), &valid)?;
    write_table(config.output_dir.join("test.csv"), &test)?;

    let summary = RunSummary {
        train_rows: train.len(),
        valid_rows: valid.len(),
        test_rows: test.len(),
        inputs,
        config: config.clone(),
        creation_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    report::save_summary(config.output_dir.join("run_summary.json"), &summary)?;

    println!(
        "\n{}",
        format!(
            "train/valid/test = {}/{}/{} rows -> {}",
            summary.train_rows,
            summary.valid_rows,
            summary.test_rows,
            config.output_dir.display()
        )
        .bright_green()
    );
    Ok(summary)
}
