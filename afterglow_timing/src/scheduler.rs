// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scheduling contract shared by timer hosts and timer users.

use core::fmt;
use core::time::Duration;

/// Opaque handle to a repeating timer.
///
/// Ids are unique within the scheduler that issued them and are never reused,
/// so a stale id held by a component can never alias a newer timer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw id minted by a foreign timer service.
    ///
    /// Hosts that implement [`Scheduler`] on top of an existing API (for
    /// example a browser interval handle) use this to hand those ids out.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerId({})", self.0)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A service that runs repeating timers on behalf of UI components.
///
/// The scheduler never calls into components directly. When a timer fires,
/// the host passes the fired [`TimerId`] to the component that owns it.
/// Components must tolerate ids they no longer own (a firing that raced with
/// a cancel) by ignoring them.
pub trait Scheduler {
    /// Starts a timer that fires every `period`, first after one full period.
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Cancels a timer.
    ///
    /// Returns `true` if a live timer was removed. Cancelling an unknown or
    /// already-cancelled id is a no-op that returns `false`.
    fn cancel(&mut self, id: TimerId) -> bool;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        (**self).cancel(id)
    }
}
