use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use sumprep::config::PrepConfig;
use sumprep::data::loader::SchemaKind;
use sumprep::io::table::read_table;
use sumprep::pipeline;

#[derive(Parser)]
#[command(
    name = "sumprep",
    version = "0.1.0",
    about = "Prepare Chinese article/title pairs for summarization training",
    long_about = "Sumprep - Turn raw news corpora into train/valid/test summarization splits\n\
                  \n\
                  Examples:\n\
                    # Run the pipeline from a config file\n\
                    sumprep prepare --config config/prep.json\n\
                    \n\
                    # Run it from flags alone\n\
                    sumprep prepare --train-file data/zh/news2016zh_train.csv \\\n\
                        --output-dir data/interim/zh --train-size 500000 --test-size 1000\n\
                    \n\
                    # Check a written split\n\
                    sumprep inspect --file data/interim/zh/train.csv"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the preparation pipeline and write train/valid/test splits
    Prepare {
        /// JSON configuration file; the flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Language tag selecting the normalizer
        #[arg(long)]
        lang: Option<String>,

        /// Raw training corpus
        #[arg(long)]
        train_file: Option<PathBuf>,

        /// Held-out raw test corpus
        #[arg(long)]
        test_file: Option<PathBuf>,

        /// Schema of the raw files (news2016zh, lcsts); inferred from the
        /// file name when omitted
        #[arg(long)]
        schema: Option<SchemaKind>,

        /// Minimum source length in characters
        #[arg(long)]
        min_source_len: Option<usize>,

        /// Maximum source length in characters
        #[arg(long)]
        max_source_len: Option<usize>,

        /// Minimum target length in characters
        #[arg(long)]
        min_target_len: Option<usize>,

        /// Maximum target length in characters
        #[arg(long)]
        max_target_len: Option<usize>,

        /// Rows to sample for the training table
        #[arg(long)]
        train_size: Option<usize>,

        /// Rows reserved for the test split
        #[arg(long)]
        test_size: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for the splits
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Show row counts and length statistics for a written split
    Inspect {
        /// Path to a split written by `prepare`
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    println!("{}", "=".repeat(60).bright_blue());
    println!(
        "{}",
        "Sumprep - Summarization dataset preparation".bright_white().bold()
    );
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    match cli.command {
        Commands::Prepare {
            config,
            lang,
            train_file,
            test_file,
            schema,
            min_source_len,
            max_source_len,
            min_target_len,
            max_target_len,
            train_size,
            test_size,
            seed,
            output_dir,
        } => {
            let config = build_config(
                config,
                lang,
                train_file,
                test_file,
                schema,
                [min_source_len, max_source_len, min_target_len, max_target_len],
                train_size,
                test_size,
                seed,
                output_dir,
            )?;

            let summary = pipeline::run(&config).context("Preparation pipeline failed")?;

            println!("\n{}", "=".repeat(60).bright_blue());
            println!("{}", "Sumprep Complete!".bright_green().bold());
            println!(
                "{}",
                format!("Output directory: {}", config.output_dir.display()).bright_white()
            );
            println!("{}", format!("Train rows: {}", summary.train_rows).bright_white());
            println!("{}", format!("Valid rows: {}", summary.valid_rows).bright_white());
            println!("{}", format!("Test rows: {}", summary.test_rows).bright_white());
            println!("{}", "=".repeat(60).bright_blue());
        }

        Commands::Inspect { file } => {
            inspect(&file)?;
        }
    }

    Ok(())
}

/// Merge the optional config file with command-line overrides.
#[allow(clippy::too_many_arguments)]
fn build_config(
    config_file: Option<PathBuf>,
    lang: Option<String>,
    train_file: Option<PathBuf>,
    test_file: Option<PathBuf>,
    schema: Option<SchemaKind>,
    bounds: [Option<usize>; 4],
    train_size: Option<usize>,
    test_size: Option<usize>,
    seed: Option<u64>,
    output_dir: Option<PathBuf>,
) -> Result<PrepConfig> {
    let mut config = match config_file {
        Some(path) => PrepConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let (Some(train_file), Some(output_dir)) = (train_file.clone(), output_dir.clone())
            else {
                bail!("--train-file and --output-dir are required when no --config is given");
            };
            PrepConfig::new(train_file, output_dir)
        }
    };

    if let Some(lang) = lang {
        config.lang = lang;
    }
    if let Some(train_file) = train_file {
        config.train_file = train_file;
    }
    if let Some(test_file) = test_file {
        config.test_file = Some(test_file);
    }
    if let Some(schema) = schema {
        config.schema = Some(schema);
    }

    let [min_source, max_source, min_target, max_target] = bounds;
    if let Some(len) = min_source {
        config.bounds.min_source_len = len;
    }
    if let Some(len) = max_source {
        config.bounds.max_source_len = len;
    }
    if let Some(len) = min_target {
        config.bounds.min_target_len = len;
    }
    if let Some(len) = max_target {
        config.bounds.max_target_len = len;
    }

    if let Some(size) = train_size {
        config.train_size = Some(size);
    }
    if let Some(size) = test_size {
        config.test_size = size;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }

    config.validate()?;
    Ok(config)
}

fn inspect(file: &PathBuf) -> Result<()> {
    let rows = read_table(file)
        .with_context(|| format!("Failed to read table from {}", file.display()))?;

    if rows.is_empty() {
        println!("{}", "Table is empty.".yellow());
        return Ok(());
    }

    println!("{}", format!("{} rows in {}", rows.len(), file.display()).bright_cyan());
    println!("{}", "-".repeat(60));

    for (name, lengths) in [
        ("source", rows.iter().map(|r| r.source_len()).collect::<Vec<_>>()),
        ("target", rows.iter().map(|r| r.target_len()).collect::<Vec<_>>()),
    ] {
        let min = lengths.iter().min().copied().unwrap_or(0);
        let max = lengths.iter().max().copied().unwrap_or(0);
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        println!(
            "{}",
            format!(
                "{:<8} length: min {:>4}  max {:>4}  mean {:>7.1}",
                name, min, max, mean
            )
            .bright_white()
        );
    }
    println!("{}", "-".repeat(60));

    Ok(())
}
