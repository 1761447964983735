use crate::config::toml_config::UtilsConfig;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Small formatting and parsing helpers on the command line")]
pub struct CliArgs {
    #[arg(long, global = true, help = "TOML file with currency, elapsed and logging settings")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shorten a number, e.g. 2500000 -> 2.50M
    Readable { number: f64 },

    /// Expand a shortened number, e.g. 2.5k -> 2500
    ParseReadable { text: String },

    /// Total seconds of a duration such as "1h 30m"
    Duration { text: String },

    /// Format an amount as currency
    Currency {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },

    /// Group the digits of a phone number
    Phone {
        number: String,
        #[arg(long)]
        country_code: Option<String>,
    },

    /// "N units ago" for an RFC 3339 timestamp
    Ago {
        since: DateTime<Utc>,
        #[arg(long, help = "Reference instant instead of the current time")]
        now: Option<DateTime<Utc>>,
    },

    /// Compact elapsed time such as "3h 15m" for an RFC 3339 timestamp
    Elapsed {
        since: DateTime<Utc>,
        #[arg(long, help = "Reference instant instead of the current time")]
        now: Option<DateTime<Utc>>,
    },

    /// Convert between camelCase, kebab-case and capitalized forms
    Case {
        #[arg(value_enum)]
        style: CaseStyle,
        text: String,
    },

    /// Count whitespace-separated words
    Words { text: String },

    /// Deep-merge two JSON documents, the second winning
    Merge { base: String, overlay: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    Kebab,
    Camel,
    First,
    Words,
    Reverse,
}

impl CliArgs {
    /// The `--config` file when given, defaults otherwise.
    pub fn load_config(&self) -> Result<UtilsConfig> {
        match &self.config {
            Some(path) => UtilsConfig::from_file(path),
            None => Ok(UtilsConfig::default()),
        }
    }
}
