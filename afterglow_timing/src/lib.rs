// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=afterglow_timing --heading-base-level=0

//! Afterglow Timing: host-agnostic repeating timers for UI runtimes.
//!
//! Components that need periodic work (auto-advancing carousels, blinking
//! carets, polling indicators) should not own a clock or a callback registry.
//! Instead they talk to a [`Scheduler`], which hands out [`TimerId`]s, and the
//! host routes each fired id back to whichever component requested it.
//!
//! Routing ids instead of storing closures keeps components free of shared
//! ownership: a component can stop or restart its own timer from inside any
//! event handler, including the handler for its own tick, without re-entering
//! the scheduler.
//!
//! This crate provides:
//!
//! - [`Scheduler`]: the two-operation contract (`schedule_repeating` / `cancel`).
//! - [`TimerId`]: an opaque, never-reused timer handle.
//! - [`TimerQueue`]: a [`Scheduler`] driven by an explicit monotonic clock that
//!   the host advances. It is equally useful for a real event loop (feed it the
//!   elapsed time every frame) and for deterministic tests (feed it simulated
//!   time).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use afterglow_timing::{Scheduler, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let blink = timers.schedule_repeating(Duration::from_millis(500));
//!
//! // Nothing is due yet.
//! assert!(timers.advance_by(Duration::from_millis(499)).is_empty());
//!
//! // The first period has elapsed.
//! let fired = timers.advance_by(Duration::from_millis(1));
//! assert_eq!(fired.as_slice(), &[blink]);
//!
//! // Cancelling is idempotent.
//! assert!(timers.cancel(blink));
//! assert!(!timers.cancel(blink));
//! ```
//!
//! ## Missed periods
//!
//! Repeating timers fire at most once per [`TimerQueue::advance_to`] call. If
//! the host stalls for several periods, the missed periods are coalesced into
//! a single late firing and the timer keeps its original phase.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod scheduler;

pub use queue::{FiredTimers, MIN_PERIOD, TimerQueue};
pub use scheduler::{Scheduler, TimerId};
