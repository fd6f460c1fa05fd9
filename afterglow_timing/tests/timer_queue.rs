// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `TimerQueue` as seen through the `Scheduler` contract.

use core::time::Duration;

use afterglow_timing::{Scheduler, TimerId, TimerQueue};

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn fires_once_per_period() {
    let mut timers = TimerQueue::new();
    let id = timers.schedule_repeating(ms(4_000));

    assert!(timers.advance_to(ms(3_999)).is_empty());
    assert_eq!(timers.advance_to(ms(4_000)).as_slice(), &[id]);
    assert!(timers.advance_to(ms(7_999)).is_empty());
    assert_eq!(timers.advance_to(ms(8_000)).as_slice(), &[id]);
    assert_eq!(timers.advance_to(ms(12_000)).as_slice(), &[id]);
}

#[test]
fn first_deadline_is_relative_to_schedule_time() {
    let mut timers = TimerQueue::new();
    timers.advance_to(ms(1_500));
    let id = timers.schedule_repeating(ms(1_000));

    assert!(timers.advance_to(ms(2_000)).is_empty());
    assert_eq!(timers.advance_to(ms(2_500)).as_slice(), &[id]);
}

#[test]
fn stalled_host_gets_a_single_late_firing() {
    let mut timers = TimerQueue::new();
    let id = timers.schedule_repeating(ms(100));

    // Five periods pass without the host looking at the queue.
    assert_eq!(timers.advance_to(ms(530)).as_slice(), &[id]);
    // The timer stays on its original phase.
    assert_eq!(timers.next_deadline(), Some(ms(600)));
}

#[test]
fn cancelled_timer_never_fires() {
    let mut timers = TimerQueue::new();
    let keep = timers.schedule_repeating(ms(100));
    let gone = timers.schedule_repeating(ms(100));

    assert!(timers.cancel(gone));
    assert!(!timers.contains(gone));
    assert_eq!(timers.advance_to(ms(100)).as_slice(), &[keep]);
}

#[test]
fn cancel_is_idempotent_and_tolerates_foreign_ids() {
    let mut timers = TimerQueue::new();
    let id = timers.schedule_repeating(ms(100));

    assert!(timers.cancel(id));
    assert!(!timers.cancel(id));
    assert!(!timers.cancel(TimerId::from_raw(9_999)));
    assert!(timers.is_empty());
}

#[test]
fn equal_deadlines_fire_in_scheduling_order() {
    let mut timers = TimerQueue::new();
    let ids: Vec<_> = (0..6).map(|_| timers.schedule_repeating(ms(50))).collect();

    let fired = timers.advance_to(ms(50));
    assert_eq!(fired.as_slice(), ids.as_slice());
}

#[test]
fn restart_resets_the_countdown() {
    let mut timers = TimerQueue::new();
    let first = timers.schedule_repeating(ms(4_000));
    timers.advance_to(ms(2_500));

    // Stop and start again mid-period.
    timers.cancel(first);
    let second = timers.schedule_repeating(ms(4_000));

    assert!(timers.advance_to(ms(4_000)).is_empty());
    assert!(timers.advance_to(ms(6_499)).is_empty());
    assert_eq!(timers.advance_to(ms(6_500)).as_slice(), &[second]);
}

#[test]
fn works_through_a_trait_object() {
    let mut timers = TimerQueue::new();
    let scheduler: &mut dyn Scheduler = &mut timers;
    let id = scheduler.schedule_repeating(ms(10));
    assert!(scheduler.cancel(id));
    assert!(timers.is_empty());
}
