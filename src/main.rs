use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use campaign_split::{
    aggregate, list_archives, partition, persist, saved_message, PartitionConfig, RunReport,
    UnknownMonthPolicy,
};

#[derive(Parser)]
#[command(name = "campaign-split")]
#[command(author, version, about = "Split zipped bank campaign extracts into client, campaign and economics tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the zipped input tables
    #[arg(long, default_value = "./files/input", global = true)]
    input_dir: PathBuf,

    /// Directory the three output tables are written to
    #[arg(long, default_value = "./files/output")]
    output_dir: PathBuf,

    /// Year used for last_contact_date
    #[arg(long, default_value = "2022", global = true)]
    year: u16,

    /// What to do with an unrecognized month abbreviation
    #[arg(long, value_enum, default_value_t = UnknownMonthPolicy::Null, global = true)]
    unknown_month: UnknownMonthPolicy,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and partition the inputs without writing anything
    Inspect {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = PartitionConfig {
        contact_year: cli.year,
        unknown_month: cli.unknown_month,
    };

    match cli.command {
        None => split_campaign_data(&cli.input_dir, &cli.output_dir, &config),
        Some(Commands::Inspect { json }) => inspect_inputs(&cli.input_dir, &config, json),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn split_campaign_data(input_dir: &Path, output_dir: &Path, config: &PartitionConfig) -> Result<()> {
    // Stage 0: Read and unify
    info!("Stage 0: Reading archives from {:?}", input_dir);
    let paths = list_archives(input_dir).context("Failed to list input archives")?;
    let aggregated = aggregate(&paths).context("Failed to read input archives")?;

    // Stage 1: Partition
    info!("Stage 1: Partitioning {} rows...", aggregated.table.len());
    let partitioned =
        partition(&aggregated.table, config).context("Failed to partition records")?;

    // Stage 2: Persist
    info!("Stage 2: Writing to {:?}", output_dir);
    let persisted = persist(&partitioned.projections, output_dir, |path| {
        println!("{}", saved_message(path));
    })
    .context("Failed to write output tables")?;

    info!(
        "Complete: {} rows into {} files",
        partitioned.projections.len(),
        persisted.written.len()
    );

    Ok(())
}

fn inspect_inputs(input_dir: &Path, config: &PartitionConfig, json: bool) -> Result<()> {
    info!("Inspecting archives in {:?}", input_dir);
    let paths = list_archives(input_dir).context("Failed to list input archives")?;
    let aggregated = aggregate(&paths).context("Failed to read input archives")?;
    let partitioned =
        partition(&aggregated.table, config).context("Failed to partition records")?;

    let report = RunReport {
        total_rows: aggregated.table.len(),
        sources: aggregated.sources,
        stats: partitioned.stats,
    };

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.format());
    }

    Ok(())
}
