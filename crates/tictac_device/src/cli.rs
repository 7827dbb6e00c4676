//! Command-line interface for the tictac_device simulator.

use clap::Parser;
use tictac_device::WakePolicy;

/// Tic-tac-toe device simulator
#[derive(Parser, Debug)]
#[command(name = "tictac_device")]
#[command(about = "Play the touch-device tic-tac-toe in a terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML device configuration
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the wake-from-sleep policy (resume or restart)
    #[arg(long)]
    pub wake_policy: Option<WakePolicy>,
}
