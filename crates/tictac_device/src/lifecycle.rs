//! Lifecycle coordinator: routes host events into the game and performs the
//! display and timer side effects of every transition.

use crate::config::{DeviceConfig, WakePolicy};
use crate::game::{GameStateMachine, Transition};
use crate::phase::{Phase, Prompt};
use crate::platform::{
    Arming, DisplayControl, RenderSurface, SleepControl, TimerCommand, TimerId, TimerPurpose,
    TimerService,
};
use crate::schedule::TimerSchedule;
use derive_getters::Getters;
use std::collections::BTreeMap;
use tictac_rules::{Cell, RulesError};
use tracing::{debug, info, instrument};

/// Owns the game session and the injected host collaborators.
///
/// Single-threaded: every hook runs to completion before the next host event
/// is delivered. At most one arming per [`TimerId`] is live at a time.
#[derive(Debug, Getters)]
pub struct LifecycleCoordinator<T, D, P, R> {
    /// The round state machine.
    game: GameStateMachine,
    /// Configuration in effect.
    config: DeviceConfig,
    /// Host timer service.
    timers: T,
    /// Host backlight.
    display: D,
    /// Host power management.
    power: P,
    /// Host renderer.
    surface: R,
    #[getter(skip)]
    schedule: TimerSchedule,
    #[getter(skip)]
    armed: BTreeMap<TimerId, Arming>,
}

impl<T, D, P, R> LifecycleCoordinator<T, D, P, R>
where
    T: TimerService,
    D: DisplayControl,
    P: SleepControl,
    R: RenderSurface,
{
    /// Creates a coordinator with a fresh session in [`Phase::NewGame`].
    pub fn new(config: DeviceConfig, timers: T, display: D, power: P, surface: R) -> Self {
        Self {
            game: GameStateMachine::new(),
            schedule: TimerSchedule::from_config(&config),
            config,
            timers,
            display,
            power,
            surface,
            armed: BTreeMap::new(),
        }
    }

    /// Purpose of the live arming of `timer`, if it is armed.
    pub fn armed_purpose(&self, timer: TimerId) -> Option<TimerPurpose> {
        self.armed.get(&timer).map(|arming| arming.purpose)
    }

    /// Application start: begin the first round.
    #[instrument(skip(self))]
    pub fn on_wake_from_reset(&mut self) {
        info!("Device reset, starting first round");
        let transition = self.game.start();
        self.enter_active_play(transition);
    }

    /// A touch landed on board cell `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::CellOutOfRange`] if the host reports a cell
    /// outside the grid.
    #[instrument(skip(self))]
    pub fn on_touch(&mut self, col: u8, row: u8) -> Result<(), RulesError> {
        let cell = Cell::new(col, row)?;
        if let Some(transition) = self.game.human_move(cell) {
            self.enter_active_play(transition);
        }
        Ok(())
    }

    /// The host is about to sleep.
    #[instrument(skip(self))]
    pub fn on_device_sleep_requested(&mut self) {
        info!(phase = %self.game.phase(), "Device going to sleep, stopping timers");
        let commands = self.schedule.on_sleep_requested();
        self.apply(commands);
    }

    /// The host woke from sleep.
    #[instrument(skip(self), fields(policy = %self.config.wake_policy()))]
    pub fn on_device_wake(&mut self) {
        let policy = *self.config.wake_policy();
        let transition = match policy {
            WakePolicy::Restart => {
                info!("Woke from sleep, restarting round");
                self.game.start()
            }
            WakePolicy::Resume if self.game.phase() == Phase::NewGame => {
                info!("Woke from sleep before any round, starting one");
                self.game.start()
            }
            WakePolicy::Resume => {
                info!(phase = %self.game.phase(), "Woke from sleep, resuming round");
                self.game.continue_game()
            }
        };
        self.enter_active_play(transition);
    }

    /// A timer armed by this coordinator expired.
    ///
    /// Expiries of timers that are no longer armed, or whose purpose no
    /// longer fits the phase, are dropped.
    ///
    /// # Errors
    ///
    /// Propagates a failure of the computer's move selection.
    #[instrument(skip(self))]
    pub fn on_timer(&mut self, timer: TimerId) -> Result<(), RulesError> {
        let Some(arming) = self.armed.get(&timer).copied() else {
            debug!("Dropping expiry of idle timer");
            return Ok(());
        };
        if !arming.repeating {
            self.armed.remove(&timer);
        }

        match arming.purpose {
            TimerPurpose::ComputerMove => {
                if let Some(transition) = self.game.computer_move()? {
                    self.enter_active_play(transition);
                }
            }
            TimerPurpose::PrepareNewGame => {
                if self.game.phase().is_round_over() {
                    self.set_prompt(Prompt::PlayAgain);
                } else {
                    debug!(phase = %self.game.phase(), "Dropping stale replay prompt");
                }
            }
            TimerPurpose::Dim => self.dim(),
            TimerPurpose::EnterSleep => {
                info!("Idle timeout, requesting sleep");
                self.power.enter_sleep();
            }
        }
        Ok(())
    }

    /// Shared tail of every transition: wake the screen, repaint, then arm
    /// what the new phase needs.
    #[instrument(skip(self))]
    fn enter_active_play(&mut self, transition: Transition) {
        info!(from = %transition.from, to = %transition.to, "Phase transition");
        let commands = self.schedule.on_activity();
        self.apply(commands);
        self.display.set_brightness(*self.config.full_brightness());
        self.refresh_view();
        let commands = self.schedule.on_enter(transition.to);
        self.apply(commands);
    }

    #[instrument(skip(self))]
    fn refresh_view(&mut self) {
        for cell in Cell::SCAN_ORDER {
            self.surface.repaint_cell(cell, self.game.board().get(cell));
        }
        self.set_prompt(self.game.prompt());
    }

    #[instrument(skip(self))]
    fn set_prompt(&mut self, prompt: Prompt) {
        self.surface.set_text(&prompt.to_string());
        self.surface.show();
    }

    /// Steps the backlight down one level at a time to the floor, then
    /// starts the sleep countdown.
    ///
    /// The steps are issued back to back; any visible fade pacing belongs to
    /// the host's [`DisplayControl`].
    #[instrument(skip(self))]
    fn dim(&mut self) {
        let commands = self.schedule.on_dim_started();
        self.apply(commands);

        let floor = *self.config.dim_brightness();
        let current = self.display.brightness();
        debug!(current, floor, "Dimming backlight");
        for level in (floor..=current).rev() {
            self.display.set_brightness(level);
        }

        let commands = self.schedule.on_dim_finished();
        self.apply(commands);
    }

    #[instrument(skip_all, fields(count = commands.len()))]
    fn apply(&mut self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::Arm(arming) => {
                    if self.armed.contains_key(&arming.timer) {
                        self.timers.cancel(arming.timer);
                    }
                    debug!(timer = %arming.timer, purpose = %arming.purpose, "Arming timer");
                    self.timers
                        .arm(arming.timer, arming.duration, arming.repeating);
                    self.armed.insert(arming.timer, arming);
                }
                TimerCommand::Cancel(timer) => {
                    self.timers.cancel(timer);
                    self.armed.remove(&timer);
                }
            }
        }
    }
}
