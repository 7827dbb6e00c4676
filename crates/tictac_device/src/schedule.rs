//! Timer transition table.
//!
//! Every timer arm or cancel the core performs comes from one of these pure
//! functions, keyed by phase or lifecycle event. Tests check the table
//! directly, without real delays.

use crate::config::DeviceConfig;
use crate::phase::Phase;
use crate::platform::{Arming, TimerCommand, TimerId, TimerPurpose};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Timer durations plus the rules for when each timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSchedule {
    move_delay: Duration,
    round_over_pause: Duration,
    dim_after: Duration,
    sleep_after_dim: Duration,
}

impl TimerSchedule {
    /// Builds the schedule from configured durations.
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self {
            move_delay: config.move_delay(),
            round_over_pause: config.round_over_pause(),
            dim_after: config.dim_after(),
            sleep_after_dim: config.sleep_after_dim(),
        }
    }

    /// Timer row for entering `phase`.
    ///
    /// The move timer is owned by the phase that armed it, so phases that do
    /// not need it cancel it.
    #[instrument(skip(self))]
    pub fn on_enter(&self, phase: Phase) -> Vec<TimerCommand> {
        match phase {
            Phase::NewGame | Phase::HumanToMove => vec![TimerCommand::Cancel(TimerId::Move)],
            Phase::ComputerThinking => vec![TimerCommand::Arm(Arming::new(
                TimerId::Move,
                TimerPurpose::ComputerMove,
                self.move_delay,
                false,
            ))],
            Phase::RoundOver(_) => vec![TimerCommand::Arm(Arming::new(
                TimerId::Move,
                TimerPurpose::PrepareNewGame,
                self.round_over_pause,
                false,
            ))],
        }
    }

    /// Entering active play: stop any pending sleep and restart the idle
    /// countdown.
    pub fn on_activity(&self) -> Vec<TimerCommand> {
        vec![
            TimerCommand::Cancel(TimerId::Sleep),
            TimerCommand::Arm(Arming::new(
                TimerId::Dim,
                TimerPurpose::Dim,
                self.dim_after,
                true,
            )),
        ]
    }

    /// Dim timer fired: it stops repeating while the backlight ramps down.
    pub fn on_dim_started(&self) -> Vec<TimerCommand> {
        vec![TimerCommand::Cancel(TimerId::Dim)]
    }

    /// Backlight reached its floor: count down to sleep.
    pub fn on_dim_finished(&self) -> Vec<TimerCommand> {
        vec![TimerCommand::Arm(Arming::new(
            TimerId::Sleep,
            TimerPurpose::EnterSleep,
            self.sleep_after_dim,
            false,
        ))]
    }

    /// Host is about to sleep: nothing may fire while it is down.
    pub fn on_sleep_requested(&self) -> Vec<TimerCommand> {
        TimerId::iter().map(TimerCommand::Cancel).collect()
    }
}
