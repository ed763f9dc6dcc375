//! CLI argument parsing

use clap::Parser;

use crate::config::defaults;

/// Power Platform tenant inventory exporter
#[derive(Parser, Debug)]
#[command(name = "ppinv")]
#[command(version)]
#[command(
    about = "Export a Power Platform tenant inventory to an Excel workbook",
    long_about = None
)]
pub struct Cli {
    /// Sign-in user name (if omitted, device-code sign-in is used)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Sign-in password (prompted for if --username is given without it)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Path of the workbook to write (overwritten if it exists)
    #[arg(short, long, default_value = defaults::REPORT_PATH)]
    pub report_path: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress the progress spinner and summary table
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
