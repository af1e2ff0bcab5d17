use std::time::Duration;

use animal_logging::LogDestination;
use animalbase_engine::LoadSettings;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Interactive animal table: filter, sort, star and pick up to two winners.
#[derive(Debug, Parser)]
#[command(name = "animalbase", version)]
pub struct Args {
    /// Source document: a JSON file path or an http(s) URL.
    #[arg(long, default_value = "animals.json")]
    pub data: String,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    pub log: LogArg,

    /// Log at debug level instead of info.
    #[arg(long)]
    pub debug: bool,

    /// Request timeout for http(s) sources, in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    Terminal,
    File,
    Both,
    Off,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
            LogArg::Off => LogDestination::Off,
        }
    }
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn load_settings(&self) -> LoadSettings {
        let mut settings = LoadSettings::default();
        if let Some(secs) = self.timeout_secs {
            settings.request_timeout = Duration::from_secs(secs);
        }
        settings
    }
}
