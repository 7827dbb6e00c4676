//! Tic-tac-toe device simulator.
//!
//! Hosts the game core on a tokio runtime. Type `<col> <row>` to tap a cell,
//! `sleep` to put the device to sleep, `wake` to wake it and `quit` to exit.
//! Any input while asleep wakes the device first.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictac_device::host::{ChannelSleep, ConsoleDisplay, ConsoleSurface, TokioTimers};
use tictac_device::{DeviceConfig, LifecycleCoordinator};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Tap(u8, u8),
    Sleep,
    Wake,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["sleep"] => Some(Command::Sleep),
            ["wake"] => Some(Command::Wake),
            ["quit"] | ["q"] => Some(Command::Quit),
            [col, row] => Some(Command::Tap(col.parse().ok()?, row.parse().ok()?)),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DeviceConfig::from_file(path).context("Failed to load device config")?,
        None => DeviceConfig::default(),
    };
    if let Some(policy) = cli.wake_policy {
        config = config.with_wake_policy(policy);
    }

    let (timers, mut expiries) = TokioTimers::new();
    let (power, mut sleep_requests) = ChannelSleep::new();
    let display = ConsoleDisplay::new(*config.full_brightness());
    let mut device =
        LifecycleCoordinator::new(config, timers, display, power, ConsoleSurface::default());

    info!("Starting tictac_device simulator");
    device.on_wake_from_reset();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut asleep = false;

    loop {
        tokio::select! {
            Some(expiry) = expiries.recv() => {
                if let Some(timer) = device.timers().accept(expiry) {
                    device.on_timer(timer)?;
                }
            }
            Some(()) = sleep_requests.recv() => {
                device.on_device_sleep_requested();
                asleep = true;
                println!("(asleep - press enter to wake)");
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                if asleep {
                    asleep = false;
                    device.on_device_wake();
                    continue;
                }
                match Command::parse(&line) {
                    Some(Command::Tap(col, row)) => {
                        if let Err(e) = device.on_touch(col, row) {
                            warn!(error = %e, "Rejected tap");
                        }
                    }
                    Some(Command::Sleep) => {
                        device.on_device_sleep_requested();
                        asleep = true;
                        println!("(asleep - press enter to wake)");
                    }
                    Some(Command::Wake) => device.on_device_wake(),
                    Some(Command::Quit) => break,
                    None => println!("Commands: <col> <row> | sleep | wake | quit"),
                }
            }
        }
    }

    info!("Simulator exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("1 2"), Some(Command::Tap(1, 2)));
        assert_eq!(Command::parse(" sleep "), Some(Command::Sleep));
        assert_eq!(Command::parse("wake"), Some(Command::Wake));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("x y"), None);
        assert_eq!(Command::parse(""), None);
    }
}
