//! Tic-tac-toe for a touch device with a dimming, sleeping screen.
//!
//! # Architecture
//!
//! - **Game**: [`GameStateMachine`] owns the board and derives the [`Phase`]
//!   after every move. Rules and the computer opponent live in
//!   [`tictac_rules`].
//! - **Lifecycle**: [`LifecycleCoordinator`] turns host events (touches,
//!   timer expiries, sleep and wake) into game actions, repaints, and timer
//!   arm/cancel calls taken from the [`TimerSchedule`] table.
//! - **Platform**: the host supplies a [`TimerService`], [`DisplayControl`],
//!   [`SleepControl`] and [`RenderSurface`]. [`host`] has tokio-backed ones,
//!   [`testing`] has recording doubles.
//!
//! # Example
//!
//! ```
//! use tictac_device::testing::{FakeDisplay, RecordingSleep, RecordingSurface, RecordingTimers};
//! use tictac_device::{DeviceConfig, LifecycleCoordinator, Phase, TimerId};
//!
//! let mut device = LifecycleCoordinator::new(
//!     DeviceConfig::default(),
//!     RecordingTimers::default(),
//!     FakeDisplay::new(255),
//!     RecordingSleep::default(),
//!     RecordingSurface::default(),
//! );
//! device.on_wake_from_reset();
//! assert_eq!(device.game().phase(), Phase::HumanToMove);
//!
//! device.on_touch(1, 1).unwrap();
//! device.on_timer(TimerId::Move).unwrap();
//! assert_eq!(device.game().phase(), Phase::HumanToMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod lifecycle;
mod phase;
mod platform;
mod schedule;

pub mod host;
pub mod testing;

pub use config::{ConfigError, DeviceConfig, WakePolicy};
pub use game::{GameStateMachine, Transition};
pub use lifecycle::LifecycleCoordinator;
pub use phase::{Outcome, Phase, Prompt};
pub use platform::{
    Arming, DisplayControl, RenderSurface, SleepControl, TimerCommand, TimerId, TimerPurpose,
    TimerService,
};
pub use schedule::TimerSchedule;
