use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Length of one Pomodoro session, in seconds.
pub const POMODORO_SECS: u32 = 25 * 60;

/// What one tick of a countdown did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Paused or already finished; nothing changed.
    Idle,
    /// Counted down one second; seconds left.
    Running(u32),
    /// Reached zero and stopped.
    Finished,
}

/// Countdown state, advanced one second per [`Countdown::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            total: total_secs,
            remaining: total_secs,
            running: false,
        }
    }

    pub fn pomodoro() -> Self {
        Self::new(POMODORO_SECS)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts or resumes. A countdown at zero stays stopped until reset.
    pub fn start(&mut self) -> bool {
        self.running = self.remaining > 0;
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.remaining = self.total;
        self.running = false;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return Tick::Finished;
        }
        Tick::Running(self.remaining)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::pomodoro()
    }
}

/// Remaining time as `mm:ss`.
impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// Drives a [`Countdown`] on the tokio runtime, once per `period`.
///
/// Every tick that changes the countdown is sent on the channel returned by
/// [`CountdownTimer::spawn`]. The task outlives [`Tick::Finished`], so a
/// finished countdown can be reset and resumed. It stops when the receiver is
/// dropped, and dropping the timer aborts it.
#[derive(Debug)]
pub struct CountdownTimer {
    state: Arc<Mutex<Countdown>>,
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Starts `countdown` and spawns the task driving it. Must be called
    /// from within a tokio runtime.
    pub fn spawn(mut countdown: Countdown, period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        countdown.start();
        let state = Arc::new(Mutex::new(countdown));
        let (tx, rx) = mpsc::unbounded_channel();

        let shared = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;

                let tick = shared.lock().unwrap_or_else(PoisonError::into_inner).tick();
                if tick == Tick::Idle {
                    if tx.is_closed() {
                        break;
                    }
                    continue;
                }
                if tx.send(tick).is_err() {
                    break;
                }
            }
            tracing::debug!("Countdown task stopped");
        });

        (Self { state, handle }, rx)
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut Countdown) -> R) -> R {
        f(&mut *self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn pause(&self) {
        self.with_state(Countdown::pause)
    }

    pub fn resume(&self) -> bool {
        self.with_state(Countdown::start)
    }

    pub fn reset(&self) {
        self.with_state(Countdown::reset)
    }

    /// A copy of the current countdown state.
    pub fn snapshot(&self) -> Countdown {
        self.with_state(|countdown| countdown.clone())
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
