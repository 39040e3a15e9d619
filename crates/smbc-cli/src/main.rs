use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "smbc")]
#[command(about = "Archive the latest SMBC comic and keep the README current")]
#[command(version)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Project root holding the archive directories and README
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the current comic into <archive-dir>/<YYYY-MM-DD>/
    Fetch {
        /// Page to scrape the comic from
        #[arg(short, long, default_value = smbc_acquire::smbc::BASE_URL)]
        url: String,

        /// Archive directory, relative to the project root
        #[arg(short, long, default_value = smbc_acquire::archive::ARCHIVE_DIR)]
        archive_dir: String,

        /// Print the archived comic as JSON
        #[arg(long)]
        json: bool,
    },

    /// Regenerate the README from the newest comic under <data-dir>
    Readme {
        /// Directory scanned for dated comics, relative to the project root
        #[arg(short, long, default_value = smbc_readme::DATA_DIR)]
        data_dir: String,

        /// README path, relative to the project root
        #[arg(short, long, default_value = smbc_readme::README_FILE)]
        output: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.utc);

    let succeeded = match cli.command {
        Commands::Fetch {
            url,
            archive_dir,
            json,
        } => fetch(&cli.root, url, &archive_dir, json).await?,
        Commands::Readme { data_dir, output } => {
            let config = smbc_readme::SummaryConfig {
                project_root: cli.root,
                data_dir,
                readme: output,
            };
            readme(&config)
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn fetch(root: &std::path::Path, url: String, archive_dir: &str, json: bool) -> Result<bool> {
    let dir = smbc_acquire::archive::daily_directory(root, archive_dir)
        .context("Failed to set up daily directory")?;
    println!("Saving comic to: {}", dir.display());

    let config = smbc_acquire::AcquireConfig {
        url,
        ..smbc_acquire::AcquireConfig::default()
    };

    match smbc_acquire::acquire_current_comic(&config, &dir).await {
        Ok(archived) => {
            println!(
                "Successfully downloaded current comic: {} ({})",
                archived.record.title(),
                archived.record.date()
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&archived)?);
            }
            println!("Comic download completed successfully!");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Acquisition failed");
            println!("Failed to download comic.");
            Ok(false)
        }
    }
}

fn readme(config: &smbc_readme::SummaryConfig) -> bool {
    match smbc_readme::update_readme(config) {
        Ok(latest) => {
            println!("README updated successfully with comic: {}", latest.title);
            true
        }
        Err(smbc_readme::SummaryError::Io { .. }) => {
            println!("Failed to update README");
            false
        }
        Err(_) => {
            println!("No comic found to update README");
            false
        }
    }
}

fn init_logging(level: &LogLevel, utc: bool) {
    // Quiet the HTML-parsing crates at debug/trace
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Status lines go to stdout, logs to stderr
    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}
