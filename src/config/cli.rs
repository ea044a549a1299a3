use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sorts packages into STANDARD, SPECIAL or REJECTED stacks")]
pub struct CliConfig {
    /// Path to a TOML file overriding thresholds and output format
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Classify a single package
    Classify {
        /// Width in centimeters
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Height in centimeters
        #[arg(allow_hyphen_values = true)]
        height: String,
        /// Length in centimeters
        #[arg(allow_hyphen_values = true)]
        length: String,
        /// Mass in kilograms
        #[arg(allow_hyphen_values = true)]
        mass: String,
        /// Overrides the output format from the config file
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Classify a handful of sample packages
    Demo,
    /// Run the reference fixture table and report pass/fail counts
    SelfTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
