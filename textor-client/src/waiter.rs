//! Bounded polling with progress reporting
//!
//! [`Waiter`] is a generic time-boxed retry loop: it paces attempts and
//! enforces a wall-clock budget, nothing more. The caller runs its own
//! probe between attempts and breaks out of the loop once satisfied; the
//! waiter ends the loop with [`Error::Timeout`] when the budget cannot
//! absorb another delay.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use textor_client::Waiter;
//!
//! # async fn example() -> textor_client::Result<()> {
//! let mut waiter = Waiter::new(Duration::from_secs(1), Duration::from_secs(10));
//! loop {
//!     let attempt = waiter.next_attempt().await?;
//!     // probe whatever is being waited on here
//!     if attempt.elapsed_secs >= 5 {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::time::Duration;

use tokio::time::{self, Instant};

use crate::error::{Error, Result};

/// One iteration of a polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollAttempt {
    /// 1-based attempt counter.
    pub attempt: u64,
    /// Whole seconds elapsed since the loop started, including the delay
    /// that preceded this attempt.
    pub elapsed_secs: u64,
}

/// Time-boxed polling loop state.
///
/// Timing starts at the first [`next_attempt`](Waiter::next_attempt)
/// call, not at construction. The waiter is not restartable: once it has
/// timed out it stays timed out. There is no external cancel signal; a
/// caller stops polling by breaking out of its own loop.
#[derive(Debug)]
pub struct Waiter {
    delay: Duration,
    timeout: Duration,
    indent: usize,
    verbose: bool,
    attempt: u64,
    started: Option<Instant>,
}

impl Waiter {
    /// Create a waiter polling every `delay`, giving up after `timeout`.
    pub fn new(delay: Duration, timeout: Duration) -> Self {
        Self {
            delay,
            timeout,
            indent: 0,
            verbose: false,
            attempt: 0,
            started: None,
        }
    }

    /// Write a progress line to stdout after every delay.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Indent progress lines by `indent` spaces.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sleep through one delay, then yield the next attempt.
    ///
    /// Fails with [`Error::Timeout`] when the remaining budget cannot
    /// absorb another full delay, so no attempt past the deadline is ever
    /// yielded. With a delay larger than the whole budget, the very
    /// first call fails.
    pub async fn next_attempt(&mut self) -> Result<PollAttempt> {
        let started = match self.started {
            Some(started) => started,
            None => {
                if self.verbose {
                    self.print_header();
                }
                let now = Instant::now();
                self.started = Some(now);
                now
            }
        };

        let now = Instant::now();
        let elapsed = now - started;
        if elapsed + self.delay > self.timeout {
            return Err(Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            });
        }

        let deadline = started + self.timeout;
        time::sleep(self.delay.min(deadline - now)).await;

        self.attempt += 1;
        let attempt = PollAttempt {
            attempt: self.attempt,
            elapsed_secs: (elapsed + self.delay).as_secs(),
        };
        if self.verbose {
            self.print_progress(&attempt);
        }
        Ok(attempt)
    }

    fn print_header(&self) {
        println!(
            "start waiter, polling every {} seconds, timeout in {} seconds.",
            self.delay.as_secs_f64(),
            self.timeout.as_secs_f64()
        );
    }

    fn print_progress(&self, attempt: &PollAttempt) {
        let remaining = self.timeout.as_secs().saturating_sub(attempt.elapsed_secs);
        print!(
            "\r{}on {} th attempt, elapsed {} seconds, remain {} seconds ...",
            " ".repeat(self.indent),
            attempt.attempt,
            attempt.elapsed_secs,
            remaining
        );
        let _ = std::io::stdout().flush();
    }
}
