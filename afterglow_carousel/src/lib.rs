// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=afterglow_carousel --heading-base-level=0

//! Afterglow Carousel: an auto-advancing slide carousel.
//!
//! [`SlideCarousel`] keeps track of which slide in a fixed sequence is active,
//! advances to the next slide on a repeating timer, and lets the user take
//! over through indicator clicks, relative navigation, or by hovering the
//! track to pause. It never gets into an inconsistent state: exactly one slide
//! and its indicator are active, the active index is always in range, and at
//! most one auto-advance timer is live.
//!
//! The carousel does not render anything. The host supplies:
//!
//! - slide surfaces implementing [`Slide`] (active marker plus measured width),
//! - one indicator per slide implementing [`Activatable`],
//! - optionally a [`Track`] that receives a horizontal translation,
//! - a [`Scheduler`] (for example [`afterglow_timing::TimerQueue`]) whose fired
//!   timers it routes back through [`SlideCarousel::on_timer`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use afterglow_carousel::{Activatable, CarouselConfig, Slide, SlideCarousel};
//! use afterglow_timing::TimerQueue;
//!
//! #[derive(Default)]
//! struct Panel {
//!     active: bool,
//! }
//!
//! impl Activatable for Panel {
//!     fn set_active(&mut self, active: bool) {
//!         self.active = active;
//!     }
//! }
//!
//! impl Slide for Panel {
//!     fn measured_width(&self) -> f64 {
//!         300.0
//!     }
//! }
//!
//! let slides: Vec<Panel> = (0..3).map(|_| Panel::default()).collect();
//! let dots: Vec<Panel> = (0..3).map(|_| Panel::default()).collect();
//! let mut timers = TimerQueue::new();
//! let mut carousel: SlideCarousel<Panel, Panel> =
//!     SlideCarousel::new(slides, dots, None, CarouselConfig::new()).unwrap();
//! carousel.start_auto(&mut timers);
//!
//! // The host loop: advance the clock, route fired timers.
//! for id in timers.advance_by(Duration::from_millis(4_000)) {
//!     carousel.on_timer(id);
//! }
//! assert_eq!(carousel.current_index(), 1);
//!
//! // The user picks slide 0; the auto-advance countdown starts over.
//! carousel.click_indicator(0, &mut timers).unwrap();
//! assert!(timers.advance_by(Duration::from_millis(3_999)).is_empty());
//!
//! carousel.dispose(&mut timers);
//! assert!(timers.is_empty());
//! ```
//!
//! ## Track offset
//!
//! When a track is present, every slide change writes
//! `Affine::translate((offset, 0.0))` where `offset` is computed by
//! [`track_offset`] from the width of slide 0 and
//! [`CarouselConfig::slide_gap`]. If slide 0 has no measurable width yet the
//! transform is skipped while the active index still updates; call
//! [`SlideCarousel::relayout`] once layout is available.
//!
//! ## Features
//!
//! - `std` (default): build with the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
pub mod surface;

pub use afterglow_timing::{Scheduler, TimerId};
pub use carousel::{SlideCarousel, track_offset};
pub use config::{CarouselConfig, DEFAULT_PERIOD, DEFAULT_SLIDE_GAP, MotionPreference};
pub use error::{CarouselError, ConfigurationError};
pub use surface::{Activatable, Slide, Track};
