//! Cosmetic number transitions for the summary display.
//!
//! The interpolation itself is pure; only the frame replay touches the
//! terminal. Correctness of the underlying totals never depends on this.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{cursor, terminal, QueueableCommand};

/// Fixed duration of a summary transition.
pub const SUMMARY_TRANSITION: Duration = Duration::from_millis(600);

const FRAME_INTERVAL: Duration = Duration::from_millis(40);

/// Linear glide from a previously displayed value to a new one. A fresh
/// transition for the same display slot replaces the old one outright;
/// transitions never queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTransition {
    start: f64,
    end: f64,
    duration: Duration,
}

impl NumberTransition {
    pub fn new(start: f64, end: f64) -> Self {
        Self::with_duration(start, end, SUMMARY_TRANSITION)
    }

    pub fn with_duration(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// Value at `elapsed`, clamped to the end value once the duration is up.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.end;
        }
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        self.start + (self.end - self.start) * progress
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn end_value(&self) -> f64 {
        self.end
    }
}

/// Redraws a block of `line_count` lines per frame until `duration` elapses.
/// The final frame is always drawn at the clamped end state.
pub fn play_block(
    duration: Duration,
    line_count: u16,
    mut render: impl FnMut(Duration) -> Vec<String>,
) -> io::Result<()> {
    let started = Instant::now();
    let mut stdout = io::stdout();
    let mut first = true;

    loop {
        let elapsed = started.elapsed().min(duration);
        if !first {
            stdout.queue(cursor::MoveUp(line_count))?;
        }
        for line in render(elapsed) {
            stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()?;

        if elapsed >= duration {
            return Ok(());
        }
        first = false;
        std::thread::sleep(FRAME_INTERVAL);
    }
}
