use clap::{Args, Subcommand};
use std::io::{self, Write};
use std::time::Duration;

use sevenk::timer::{Countdown, CountdownTimer, Tick};

use super::CommandResult;
use crate::config::{Config, MAX_POMODORO_MINUTES};

#[derive(Args)]
pub struct TimerCommand {
    #[command(subcommand)]
    pub command: TimerSubcommand,
}

#[derive(Subcommand)]
pub enum TimerSubcommand {
    /// Run a Pomodoro countdown; Ctrl-C stops it
    Start {
        /// Length in minutes (default: pomodoro_minutes from config)
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=MAX_POMODORO_MINUTES as i64))]
        minutes: Option<u32>,
    },
}

impl TimerCommand {
    pub fn run(&self, config: &Config) -> CommandResult {
        match &self.command {
            TimerSubcommand::Start { minutes } => {
                let minutes = minutes.unwrap_or(config.pomodoro_minutes.value);
                let secs = minutes
                    .checked_mul(60)
                    .filter(|&secs| secs > 0)
                    .ok_or("Timer length must be between 1 and 1440 minutes")?;

                let runtime = tokio::runtime::Runtime::new()?;
                runtime.block_on(run_countdown(Countdown::new(secs)))
            }
        }
    }
}

async fn run_countdown(countdown: Countdown) -> CommandResult {
    print!("\r{} ", countdown);
    io::stdout().flush()?;

    let (timer, mut ticks) = CountdownTimer::spawn(countdown, Duration::from_secs(1));
    loop {
        tokio::select! {
            tick = ticks.recv() => match tick {
                Some(Tick::Running(_)) => {
                    print!("\r{} ", timer.snapshot());
                    io::stdout().flush()?;
                }
                Some(Tick::Finished) | None => {
                    println!("\r00:00");
                    println!("Timer Complete! Time for a break.");
                    return Ok(());
                }
                Some(Tick::Idle) => {}
            },
            _ = tokio::signal::ctrl_c() => {
                timer.pause();
                println!("\nStopped with {} left", timer.snapshot());
                return Ok(());
            }
        }
    }
}
