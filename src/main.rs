use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use stratus_dbscan::{DEFAULT_EPS, DEFAULT_MIN_SAMPLES, DbscanConfig};
use stratus_frame::{Column, Frame};
use stratus_io::{ExperimentName, FrameReader, SplitWriter};
use stratus_split::SplitConfig;

#[derive(Parser)]
#[command(name = "stratus")]
#[command(about = "Stratified dataset splitting with density-based sub-grouping")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for reproducibility
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Split a dataset into N stratified subsets
    Split {
        /// Path to the input CSV file
        #[arg(long)]
        data: PathBuf,

        /// Comma-separated split percentages, must sum to 1 (e.g. 0.8,0.2)
        #[arg(long, value_delimiter = ',', required = true)]
        percentages: Vec<f64>,

        /// Column holding the class label to preserve across splits
        #[arg(long)]
        class_column: Option<String>,

        /// Comma-separated numeric columns for density sub-grouping
        #[arg(long, value_delimiter = ',')]
        stratify_columns: Option<Vec<String>>,

        /// DBSCAN neighborhood radius for sub-grouping
        #[arg(long, default_value_t = DEFAULT_EPS)]
        eps: f64,

        /// DBSCAN core-point neighborhood size
        #[arg(long, default_value_t = DEFAULT_MIN_SAMPLES)]
        min_samples: usize,

        /// Experiment name for output files (must match [a-zA-Z0-9_-]+)
        #[arg(long)]
        experiment: String,

        /// Output directory for result files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Show row/column counts and per-class sizes for a dataset
    Inspect {
        /// Path to the input CSV file
        #[arg(long)]
        data: PathBuf,

        /// Column holding the class label to tally
        #[arg(long)]
        class_column: Option<String>,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct SplitOutput {
    experiment: String,
    n_records: usize,
    n_strata: usize,
    n_classes: usize,
    seed: u64,
    target_percentages: Vec<f64>,
    sizes: Vec<usize>,
    shares: Vec<f64>,
}

#[derive(Serialize)]
struct InspectOutput {
    n_records: usize,
    n_columns: usize,
    columns: Vec<ColumnInfo>,
    classes: Option<Vec<ClassSize>>,
}

#[derive(Serialize)]
struct ColumnInfo {
    name: String,
    kind: &'static str,
}

#[derive(Serialize)]
struct ClassSize {
    class: String,
    n_records: usize,
}

fn read_frame(path: &Path) -> Result<Frame> {
    let frame = FrameReader::new(path)
        .read()
        .context("failed to read input CSV")?;
    info!(
        n_records = frame.n_rows(),
        n_columns = frame.column_names().len(),
        "dataset loaded"
    );
    Ok(frame)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Split {
            data,
            percentages,
            class_column,
            stratify_columns,
            eps,
            min_samples,
            experiment,
            output_dir,
        } => {
            let experiment_name = ExperimentName::new(experiment.clone())?;

            // Read dataset
            let frame = read_frame(&data)?;

            // Build split configuration
            let dbscan = DbscanConfig::new(eps, min_samples)?;
            let mut config = SplitConfig::new(percentages)?
                .with_seed(cli.seed)
                .with_dbscan(dbscan);
            if let Some(column) = class_column {
                config = config.with_class_column(column);
            }
            if let Some(columns) = stratify_columns {
                config = config.with_stratify_columns(columns);
            }

            // Run the splitter
            let result = config.split(&frame).context("split failed")?;

            // Write JSON artifact
            let writer = SplitWriter::new(&output_dir, experiment_name)?;
            writer.write_splits(&config, &result)?;

            // Build and print stdout summary
            let output = SplitOutput {
                experiment,
                n_records: result.n_records,
                n_strata: result.n_strata,
                n_classes: result.n_classes,
                seed: config.seed(),
                target_percentages: config.percentages().to_vec(),
                sizes: result.sizes(),
                shares: result.shares(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Inspect { data, class_column } => {
            let frame = read_frame(&data)?;

            let columns: Vec<ColumnInfo> = frame
                .column_names()
                .iter()
                .map(|name| ColumnInfo {
                    name: name.clone(),
                    kind: match frame.column(name) {
                        Some(Column::Numeric(_)) => "numeric",
                        _ => "categorical",
                    },
                })
                .collect();

            let classes = match class_column {
                Some(name) => {
                    let all_rows: Vec<usize> = (0..frame.n_rows()).collect();
                    let groups = frame
                        .group_rows(&name, &all_rows)
                        .context("failed to group by class column")?;
                    Some(
                        groups
                            .into_iter()
                            .map(|(key, rows)| ClassSize {
                                class: key.to_string(),
                                n_records: rows.len(),
                            })
                            .collect(),
                    )
                }
                None => None,
            };

            let output = InspectOutput {
                n_records: frame.n_rows(),
                n_columns: columns.len(),
                columns,
                classes,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
