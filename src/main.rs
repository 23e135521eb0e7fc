use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use region_ranker::config::{RunConfig, RunSettings, DEFAULT_TEMPLATE_PATH};
use region_ranker::scoring::DedupePolicy;
use region_ranker::RankError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_TEMPLATE: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_SCORING: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Score standings and write the region ranking (default if no subcommand)
    Rank,
    /// Parse the ranking template and list its slots per event and year
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "region-ranker")]
#[command(about = "Rank regions by their international tournament results", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/region-ranker/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// First MSI year to score
    #[arg(short, long, global = true)]
    msi: Option<i32>,

    /// First Worlds year to score
    #[arg(short, long, global = true)]
    worlds: Option<i32>,

    /// Points for first place in every event
    #[arg(short, long, global = true)]
    score: Option<i64>,

    /// Count only one campaign per region per event
    #[arg(short, long, global = true)]
    unique: bool,

    /// Count every campaign, even if the config file sets `unique: true`
    #[arg(long, global = true, conflicts_with = "unique")]
    no_unique: bool,

    /// Which campaign survives when --unique collapses a region
    #[arg(long, value_enum, global = true)]
    dedupe: Option<DedupePolicy>,

    /// Standings table (JSON)
    #[arg(long, global = true)]
    standings: Option<PathBuf>,

    /// Ranking template (YAML)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Where to write the region ranking (JSON)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Print tab-separated values instead of a table
    #[arg(long, global = true)]
    tsv: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Flags given on the command line, layered over the config file
    fn overrides(&self) -> RunConfig {
        RunConfig {
            score: self.score,
            msi_start: self.msi,
            worlds_start: self.worlds,
            unique: match (self.unique, self.no_unique) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            dedupe: self.dedupe,
            standings: self.standings.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "region_ranker=debug"
    } else {
        "region_ranker=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &RankError) -> i32 {
    match err.stage() {
        "configuration" => EXIT_CONFIG,
        "template" => EXIT_TEMPLATE,
        "scoring" => EXIT_SCORING,
        _ => EXIT_IO,
    }
}

/// Print a failed run and exit with the failing stage's code
fn fail(err: RankError) -> ! {
    let code = exit_code(&err);
    match &err {
        RankError::Configuration(errors) => {
            eprintln!("Configuration errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
        }
        RankError::UnmatchedPosition(rows) => {
            eprintln!("Scoring failed, {} row(s) have no template slot:", rows.len());
            for row in rows {
                eprintln!("  - {}", row);
            }
        }
        other => eprintln!("{} failed: {}", other.stage(), other),
    }
    std::process::exit(code);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Rank);
    let start_time = Instant::now();
    let use_colors = region_ranker::output::should_use_colors();

    let file_config = match region_ranker::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let config = file_config.merge(cli.overrides());

    match command {
        Commands::Check => {
            let path = config
                .template
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH));
            let template = match region_ranker::template::load_template(&path) {
                Ok(t) => t,
                Err(e) => fail(e),
            };
            println!(
                "{}",
                region_ranker::output::format_template(&template, use_colors)
            );
        }
        Commands::Rank => {
            let current_year = chrono::Local::now().year();
            let settings = match RunSettings::from_config(config, current_year) {
                Ok(s) => s,
                Err(e) => fail(e),
            };

            info!(
                "Scoring Worlds {}-{} and MSI {}-{}",
                settings.scoring.worlds.start,
                current_year - 1,
                settings.scoring.msi.start,
                current_year - 1
            );

            let outcome = match region_ranker::rank::run(&settings) {
                Ok(o) => o,
                Err(e) => fail(e),
            };

            if cli.tsv {
                println!("{}", region_ranker::output::format_tsv(&outcome.ranking));
            } else {
                println!(
                    "{}",
                    region_ranker::output::format_ranking_table(&outcome.ranking, use_colors)
                );
            }

            info!(
                "{} rows scored, {} outside the window, {} duplicates removed in {:?}",
                outcome.scored_rows,
                outcome.excluded_rows,
                outcome.duplicates_removed,
                start_time.elapsed()
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
