// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Scheduler`] driven by an explicit monotonic clock.

use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::scheduler::{Scheduler, TimerId};

/// Shortest period a [`TimerQueue`] will run a timer at.
///
/// Shorter (including zero) periods are clamped up to this value.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Timers that fired during one [`TimerQueue::advance_to`] call, in firing order.
pub type FiredTimers = SmallVec<[TimerId; 4]>;

#[derive(Copy, Clone, Debug)]
struct Entry {
    period: Duration,
    deadline: Duration,
}

/// Repeating timers over a clock the host advances explicitly.
///
/// Time is a [`Duration`] since an arbitrary host-chosen epoch. The queue never
/// reads a system clock, which makes it usable in `no_std` hosts and fully
/// deterministic in tests.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use afterglow_timing::{Scheduler, TimerQueue};
///
/// let mut timers = TimerQueue::new();
/// let fast = timers.schedule_repeating(Duration::from_millis(100));
/// let slow = timers.schedule_repeating(Duration::from_millis(250));
///
/// let fired = timers.advance_to(Duration::from_millis(250));
/// // Coalesced: `fast` was due at 100 and 200 but fires once.
/// assert_eq!(fired.as_slice(), &[fast, slow]);
/// assert_eq!(timers.next_deadline(), Some(Duration::from_millis(300)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: HashMap<TimerId, Entry>,
}

impl TimerQueue {
    /// Creates an empty queue whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue whose clock starts at `now`.
    #[must_use]
    pub fn with_now(now: Duration) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Returns the current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of live timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if no timers are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Returns `true` if `id` is a live timer of this queue.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Returns the period of a live timer.
    #[must_use]
    pub fn period(&self, id: TimerId) -> Option<Duration> {
        self.timers.get(&id).map(|entry| entry.period)
    }

    /// Returns the earliest pending deadline, if any timer is live.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|entry| entry.deadline).min()
    }

    /// Moves the clock to `now` and returns every timer that came due.
    ///
    /// The clock never runs backwards: an earlier `now` is ignored and only
    /// timers already due at the current clock fire. Fired timers are ordered
    /// by deadline, then by the order they were scheduled in. Each timer fires
    /// at most once per call; missed periods are skipped and the next deadline
    /// stays on the timer's original phase.
    pub fn advance_to(&mut self, now: Duration) -> FiredTimers {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;

        let mut due: Vec<(Duration, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(id, entry)| (entry.deadline, *id))
            .collect();
        // Ids are minted in increasing order, so ties resolve to scheduling order.
        due.sort_unstable();

        let mut fired = FiredTimers::new();
        for (_, id) in due {
            if let Some(entry) = self.timers.get_mut(&id) {
                entry.deadline = next_deadline(entry.deadline, entry.period, now);
                fired.push(id);
            }
        }
        if !fired.is_empty() {
            trace!(?now, count = fired.len(), "timers fired");
        }
        fired
    }

    /// Advances the clock by `delta`. See [`advance_to`](Self::advance_to).
    pub fn advance_by(&mut self, delta: Duration) -> FiredTimers {
        self.advance_to(self.now.saturating_add(delta))
    }

    /// Cancels every live timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

impl Scheduler for TimerQueue {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let id = TimerId::from_raw(self.next_id);
        self.next_id += 1;
        self.timers.insert(
            id,
            Entry {
                period,
                deadline: self.now.saturating_add(period),
            },
        );
        trace!(%id, ?period, "timer scheduled");
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(&id).is_some();
        if removed {
            trace!(%id, "timer cancelled");
        }
        removed
    }
}

/// First deadline on the timer's phase that lies strictly after `now`.
fn next_deadline(deadline: Duration, period: Duration, now: Duration) -> Duration {
    let late = now.saturating_sub(deadline);
    let skipped = late.as_nanos() / period.as_nanos();
    u32::try_from(skipped + 1)
        .ok()
        .and_then(|steps| period.checked_mul(steps))
        .and_then(|step| deadline.checked_add(step))
        .unwrap_or_else(|| now.saturating_add(period))
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn next_deadline_on_time() {
        assert_eq!(next_deadline(ms(100), ms(100), ms(100)), ms(200));
    }

    #[test]
    fn next_deadline_skips_missed_periods() {
        assert_eq!(next_deadline(ms(100), ms(100), ms(350)), ms(400));
        assert_eq!(next_deadline(ms(100), ms(100), ms(400)), ms(500));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_repeating(Duration::ZERO);
        assert_eq!(queue.period(id), Some(MIN_PERIOD));
        assert_eq!(queue.next_deadline(), Some(MIN_PERIOD));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule_repeating(ms(10));
        queue.cancel(a);
        let b = queue.schedule_repeating(ms(10));
        assert_ne!(a, b);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut queue = TimerQueue::with_now(ms(1_000));
        let id = queue.schedule_repeating(ms(100));
        assert!(queue.advance_to(ms(500)).is_empty());
        assert_eq!(queue.now(), ms(1_000));
        assert_eq!(queue.advance_to(ms(1_100)).as_slice(), &[id]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = TimerQueue::new();
        queue.schedule_repeating(ms(10));
        queue.schedule_repeating(ms(20));
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert!(queue.advance_by(ms(100)).is_empty());
    }
}
