//! Cancellable one-tick-per-interval scheduler.
//!
//! A [`Ticker`] owns a background thread that sends a [`Tick`] every
//! interval. Dropping the ticker stops and joins the thread, and discards
//! any ticks that were not yet received.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::GymError;

/// One elapsed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// A running interval schedule.
pub struct Ticker {
    ticks: Receiver<Tick>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `interval`. The first tick arrives after one
    /// full interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the background thread cannot be spawned.
    pub fn start(interval: Duration) -> Result<Self, GymError> {
        let (tick_tx, ticks) = mpsc::channel();
        let (stop, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("session-ticker".to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(Tick).is_err() {
                            break;
                        }
                    }
                    // stop requested or owner gone
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        log::debug!("ticker started, interval {interval:?}");
        Ok(Self {
            ticks,
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Take every tick that has already arrived without blocking.
    ///
    /// Returns how many were pending.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(Tick) => count += 1,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
            }
        }
    }

    /// Block until the next tick, or until `timeout` passes.
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<Tick> {
        self.ticks.recv_timeout(timeout).ok()
    }

    /// Stop the schedule. Equivalent to dropping the ticker.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // disconnecting the stop channel wakes the thread immediately
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("ticker thread panicked");
            }
        }
        log::debug!("ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_ticks_arrive() {
        let ticker = Ticker::start(Duration::from_millis(5)).unwrap();
        for _ in 0..3 {
            assert_eq!(ticker.wait(Duration::from_secs(2)), Some(Tick));
        }
    }

    #[test]
    fn test_drain_counts_pending_ticks() {
        let ticker = Ticker::start(Duration::from_millis(5)).unwrap();
        thread::sleep(Duration::from_millis(60));
        assert!(ticker.drain() >= 1);
    }

    #[test]
    fn test_no_tick_before_first_interval() {
        let ticker = Ticker::start(Duration::from_secs(60)).unwrap();
        assert_eq!(ticker.drain(), 0);
        assert_eq!(ticker.wait(Duration::from_millis(20)), None);
    }

    #[test]
    fn test_cancel_does_not_wait_for_interval() {
        let ticker = Ticker::start(Duration::from_secs(60)).unwrap();
        let started = Instant::now();
        ticker.cancel();
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
