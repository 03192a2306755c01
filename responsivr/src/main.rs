mod fixture;
mod paths;
mod report;
mod script;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use selecty::Page;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::fixture::PageFixture;
use crate::report::PageReport;

#[derive(Parser)]
#[command(author, version, about = "Mount Selecty widgets on a page fixture and replay its script", long_about = None)]
struct Cli {
    /// Page fixture (JSON)
    page: PathBuf,

    /// Override the fixture's user agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Override the multi-select summary separator
    #[arg(long)]
    separator: Option<String>,

    /// Level written to the log file
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    log_level: LogLevel,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Mount only, skip the fixture's script
    #[arg(long)]
    no_script: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Log to `latest.log` in the cache dir, or the working directory when
/// there is no usable home.
fn init_logging(level: LevelFilter) -> Result<PathBuf> {
    paths::rotate_logs();

    let path = paths::log_file()
        .filter(|path| path.parent().is_some_and(|dir| fs::create_dir_all(dir).is_ok()))
        .unwrap_or_else(|| PathBuf::from("responsivr.log"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("failed to initialize logger")?;
    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging(cli.log_level.into())?;
    log::info!("responsivr {} logging to {}", env!("CARGO_PKG_VERSION"), log_path.display());

    let fixture = PageFixture::load(&cli.page)?;

    let mut config = fixture.config.clone();
    if let Some(separator) = cli.separator {
        config = config.separator(separator);
    }
    let environment = fixture.environment(cli.user_agent.as_deref());
    let document = fixture
        .build_document(&config)
        .with_context(|| format!("invalid page {}", cli.page.display()))?;

    let mut page = Page::new(document, config, environment);
    let mount = page.mount_all();

    let outcomes = if cli.no_script {
        Vec::new()
    } else {
        script::replay(&mut page, &fixture.script).context("script failed")?
    };

    let report = PageReport::collect(&mut page, mount, outcomes);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
