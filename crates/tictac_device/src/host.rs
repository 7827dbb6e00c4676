//! Tokio-backed host collaborators for running the core off-device.

use crate::platform::{DisplayControl, RenderSurface, SleepControl, TimerId, TimerService};
use std::collections::HashMap;
use std::time::Duration;
use tictac_rules::{Board, Cell, Token};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info, instrument, trace};

/// An expiry reported by [`TokioTimers`].
///
/// `generation` identifies the arming that produced it, so an expiry already
/// queued when its timer was cancelled or re-armed can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerExpiry {
    /// Timer that fired.
    pub timer: TimerId,
    /// Arming it belongs to.
    pub generation: u64,
}

/// Timer service that runs each arming as a tokio task.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioTimers {
    tx: mpsc::UnboundedSender<TimerExpiry>,
    tasks: HashMap<TimerId, (u64, JoinHandle<()>)>,
    next_generation: u64,
}

impl TokioTimers {
    /// Creates the service and the receiver its expiries arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerExpiry>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timers = Self {
            tx,
            tasks: HashMap::new(),
            next_generation: 0,
        };
        (timers, rx)
    }

    /// Returns the timer if `expiry` belongs to its live arming.
    pub fn accept(&self, expiry: TimerExpiry) -> Option<TimerId> {
        match self.tasks.get(&expiry.timer) {
            Some((generation, _)) if *generation == expiry.generation => Some(expiry.timer),
            _ => {
                debug!(timer = %expiry.timer, "Discarding expiry from an old arming");
                None
            }
        }
    }
}

impl TimerService for TokioTimers {
    #[instrument(skip(self))]
    fn arm(&mut self, timer: TimerId, duration: Duration, repeating: bool) {
        self.cancel(timer);
        let generation = self.next_generation;
        self.next_generation += 1;
        let tx = self.tx.clone();
        let expiry = TimerExpiry { timer, generation };

        let handle = tokio::spawn(async move {
            if repeating {
                let mut ticks = interval_at(Instant::now() + duration, duration);
                loop {
                    ticks.tick().await;
                    if tx.send(expiry).is_err() {
                        break;
                    }
                }
            } else {
                sleep(duration).await;
                let _ = tx.send(expiry);
            }
        });
        self.tasks.insert(timer, (generation, handle));
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some((_, handle)) = self.tasks.remove(&timer) {
            trace!(timer = %timer, "Aborting timer task");
            handle.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.values() {
            handle.abort();
        }
    }
}

/// Backlight that only remembers its level.
#[derive(Debug, Clone)]
pub struct ConsoleDisplay {
    level: u8,
}

impl ConsoleDisplay {
    /// Creates a display at `level`.
    pub fn new(level: u8) -> Self {
        Self { level }
    }
}

impl DisplayControl for ConsoleDisplay {
    fn set_brightness(&mut self, level: u8) {
        trace!(level, "Backlight");
        self.level = level;
    }

    fn brightness(&self) -> u8 {
        self.level
    }
}

/// Forwards sleep requests to the host loop.
#[derive(Debug, Clone)]
pub struct ChannelSleep {
    tx: mpsc::UnboundedSender<()>,
}

impl ChannelSleep {
    /// Creates the control and the receiver requests arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SleepControl for ChannelSleep {
    fn enter_sleep(&mut self) {
        info!("Sleep requested");
        let _ = self.tx.send(());
    }
}

/// Prints the board and prompt to stdout whenever the prompt is shown.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface {
    board: Board,
    text: String,
}

impl RenderSurface for ConsoleSurface {
    fn repaint_cell(&mut self, cell: Cell, token: Token) {
        self.board.set(cell, token);
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn show(&mut self) {
        println!("\n{}\n{}", self.text, self.board);
    }
}
