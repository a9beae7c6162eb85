use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "zapwash",
    version,
    about = "Book and track laundry pickups from the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "ZAPWASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Toast duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Show the clock in the header bar.
    #[arg(long)]
    pub show_clock: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Screen to open on start (home, booking, tracking, wallet, profile).
    #[arg(long, value_name = "SCREEN")]
    pub start_screen: Option<String>,
}
