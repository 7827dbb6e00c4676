//! Interfaces the core consumes from the host device.
//!
//! The core never owns pixels, scheduling or power state. It talks to the
//! host through these traits, which are injected at construction.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictac_rules::{Cell, Token};

/// One of the three independent timers the core drives.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum TimerId {
    /// Gates the computer's reply and the end-of-round pause.
    #[display("move")]
    Move,
    /// Counts idle time before the screen dims.
    #[display("dim")]
    Dim,
    /// Counts dimmed time before the device sleeps.
    #[display("sleep")]
    Sleep,
}

/// What an armed timer is for. Recorded at arming time and consulted on
/// expiry, so one timer can serve different purposes across phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum TimerPurpose {
    /// Play the computer's move.
    #[display("computer move")]
    ComputerMove,
    /// Swap the round summary for the replay prompt.
    #[display("prepare new game")]
    PrepareNewGame,
    /// Start the dim sequence.
    #[display("dim")]
    Dim,
    /// Ask the host to enter low-power sleep.
    #[display("enter sleep")]
    EnterSleep,
}

/// A single request to schedule a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Arming {
    /// Timer to arm.
    pub timer: TimerId,
    /// Why it is armed.
    pub purpose: TimerPurpose,
    /// Delay until the (first) expiry.
    pub duration: Duration,
    /// Whether it fires again every `duration` until cancelled.
    pub repeating: bool,
}

/// A timer side effect of a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Arm a timer, replacing any earlier arming of the same timer.
    Arm(Arming),
    /// Cancel a timer. Cancelling an idle timer is not an error.
    Cancel(TimerId),
}

/// Host timer service.
///
/// Expiries are reported back to the core as a bare [`TimerId`] through
/// [`LifecycleCoordinator::on_timer`](crate::LifecycleCoordinator::on_timer).
pub trait TimerService {
    /// Schedules `timer` to expire after `duration`.
    fn arm(&mut self, timer: TimerId, duration: Duration, repeating: bool);

    /// Removes a pending expiry of `timer`, if any.
    fn cancel(&mut self, timer: TimerId);
}

/// Display backlight.
pub trait DisplayControl {
    /// Sets the backlight level.
    fn set_brightness(&mut self, level: u8);

    /// Current backlight level.
    fn brightness(&self) -> u8;
}

/// Device power management.
pub trait SleepControl {
    /// Requests that the device enter low-power sleep.
    fn enter_sleep(&mut self);
}

/// Board and prompt renderer.
pub trait RenderSurface {
    /// Repaints one cell showing `token`.
    fn repaint_cell(&mut self, cell: Cell, token: Token);

    /// Replaces the prompt text.
    fn set_text(&mut self, text: &str);

    /// Makes the prompt visible.
    fn show(&mut self);
}
