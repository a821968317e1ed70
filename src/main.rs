//! CLI entry point for the club staff rater.
//!
//! Provides subcommands for submitting a rating, listing stored ratings,
//! and printing aggregate summaries.

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use club_rater::analyzers::summarize;
use club_rater::catalog::{COUNTRIES, POSITIONS};
use club_rater::config::Settings;
use club_rater::locale::Language;
use club_rater::output::{render_ratings, render_summary, summary_json};
use club_rater::{CsvStore, RatingForm, Scores, load_dataset, submit_rating};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "club_rater")]
#[command(about = "Rate football club technical staff and summarize the ratings", long_about = None)]
struct Cli {
    /// CSV file holding the ratings (overrides CLUB_RATER_DATA)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Display language (overrides CLUB_RATER_LANG)
    #[arg(long, global = true, value_enum)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data file with its header row if it does not exist
    Init,
    /// Submit a new rating
    Submit(SubmitArgs),
    /// Show all stored ratings in submission order
    List,
    /// Show aggregate charts over all ratings
    Summary {
        /// Print the summary as JSON instead of charts
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args)]
struct SubmitArgs {
    /// Name of the person being rated (also recorded as the agent)
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, value_parser = PossibleValuesParser::new(POSITIONS.iter().copied()))]
    position: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(COUNTRIES.iter().copied()))]
    country: Option<String>,

    #[arg(long, default_value = "")]
    club: String,

    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    clarity: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    speed: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    professionalism: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    courtesy: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    efficiency: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    problem_solving: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    reliability: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    commitment: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    accessibility: i64,
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    flexibility: i64,

    /// General comments
    #[arg(long, default_value = "")]
    comment: String,
}

impl SubmitArgs {
    fn into_form(self) -> Result<RatingForm> {
        let scores = Scores::new([
            self.clarity,
            self.speed,
            self.professionalism,
            self.courtesy,
            self.efficiency,
            self.problem_solving,
            self.reliability,
            self.commitment,
            self.accessibility,
            self.flexibility,
        ])?;

        Ok(RatingForm {
            name: self.name,
            position: self.position.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            club: self.club,
            scores,
            comment: self.comment,
        })
    }
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let settings = Settings::from_env()?.with_overrides(cli.data, cli.lang);

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("club_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let labels = settings.language.labels();
    let store = CsvStore::new(&settings.data_path);
    info!(
        data = %settings.data_path.display(),
        lang = %settings.language,
        "Using ratings file"
    );

    match cli.command {
        Commands::Init => {
            if store.init()? {
                info!("Created empty ratings file");
            } else {
                info!("Ratings file already exists");
            }
        }
        Commands::Submit(args) => {
            let form = args.into_form()?;
            let mut dataset = load_dataset(&store);

            match submit_rating(&form) {
                Ok(record) => {
                    dataset.commit(record, &store)?;
                    println!("{}", labels.submit_success);
                }
                Err(e) => {
                    warn!(error = %e, "Rating rejected");
                    eprintln!("{}", labels.validation_error(&e));
                    return Ok(ExitCode::from(2));
                }
            }
        }
        Commands::List => {
            let dataset = load_dataset(&store);
            println!("{}", labels.title);
            println!("{}\n", labels.welcome);
            print!("{}", render_ratings(&dataset, labels));
        }
        Commands::Summary { json } => {
            let dataset = load_dataset(&store);
            match summarize(&dataset) {
                None => println!("{}", labels.no_data),
                Some(summary) if json => println!("{}", summary_json(&summary)?),
                Some(summary) => print!("{}", render_summary(&summary, labels)),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
