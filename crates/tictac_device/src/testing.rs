//! Recording doubles for the host collaborators.
//!
//! They capture every call the core makes so timer choreography and repaints
//! can be asserted step by step, with no real clock involved.

use crate::platform::{DisplayControl, RenderSurface, SleepControl, TimerId, TimerService};
use std::collections::BTreeSet;
use std::time::Duration;
use tictac_rules::{Cell, Token};

/// A call made to [`RecordingTimers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// `arm` was called.
    Armed {
        /// Timer armed.
        timer: TimerId,
        /// Requested delay.
        duration: Duration,
        /// Requested repetition.
        repeating: bool,
    },
    /// `cancel` was called.
    Cancelled(TimerId),
}

/// Timer service that records calls and tracks which timers are pending.
#[derive(Debug, Clone, Default)]
pub struct RecordingTimers {
    events: Vec<TimerEvent>,
    pending: BTreeSet<TimerId>,
}

impl RecordingTimers {
    /// Every call so far, oldest first.
    pub fn events(&self) -> &[TimerEvent] {
        &self.events
    }

    /// Whether `timer` was armed and not cancelled since.
    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.pending.contains(&timer)
    }

    /// Number of `arm` calls for `timer`.
    pub fn arm_count(&self, timer: TimerId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Armed { timer: t, .. } if *t == timer))
            .count()
    }
}

impl TimerService for RecordingTimers {
    fn arm(&mut self, timer: TimerId, duration: Duration, repeating: bool) {
        self.events.push(TimerEvent::Armed {
            timer,
            duration,
            repeating,
        });
        self.pending.insert(timer);
    }

    fn cancel(&mut self, timer: TimerId) {
        self.events.push(TimerEvent::Cancelled(timer));
        self.pending.remove(&timer);
    }
}

/// Backlight that remembers every level it was set to.
#[derive(Debug, Clone)]
pub struct FakeDisplay {
    level: u8,
    history: Vec<u8>,
}

impl FakeDisplay {
    /// Creates a display at `level`.
    pub fn new(level: u8) -> Self {
        Self {
            level,
            history: Vec::new(),
        }
    }

    /// Levels set so far, oldest first.
    pub fn history(&self) -> &[u8] {
        &self.history
    }
}

impl DisplayControl for FakeDisplay {
    fn set_brightness(&mut self, level: u8) {
        self.level = level;
        self.history.push(level);
    }

    fn brightness(&self) -> u8 {
        self.level
    }
}

/// Power control that counts sleep requests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleep {
    requests: usize,
}

impl RecordingSleep {
    /// Number of times sleep was requested.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl SleepControl for RecordingSleep {
    fn enter_sleep(&mut self) {
        self.requests += 1;
    }
}

/// Renderer that keeps the last painted state of each cell and every prompt.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    cells: [[Token; 3]; 3],
    repaints: usize,
    texts: Vec<String>,
    shows: usize,
}

impl RecordingSurface {
    /// Token last painted at `cell`.
    pub fn painted(&self, cell: Cell) -> Token {
        self.cells[cell.col() as usize][cell.row() as usize]
    }

    /// Total cell repaints.
    pub fn repaints(&self) -> usize {
        self.repaints
    }

    /// Every prompt text set, oldest first.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Most recent prompt text.
    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }

    /// Number of `show` calls.
    pub fn shows(&self) -> usize {
        self.shows
    }
}

impl RenderSurface for RecordingSurface {
    fn repaint_cell(&mut self, cell: Cell, token: Token) {
        self.cells[cell.col() as usize][cell.row() as usize] = token;
        self.repaints += 1;
    }

    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn show(&mut self) {
        self.shows += 1;
    }
}
