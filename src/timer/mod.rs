//! Scheduled work: the Pomodoro countdown and the notepad auto-save debounce.

mod countdown;
mod debounce;

pub use countdown::{Countdown, CountdownTimer, Tick, POMODORO_SECS};
pub use debounce::Debouncer;
