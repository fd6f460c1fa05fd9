// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use afterglow_timing::{Scheduler, TimerId};
use kurbo::Affine;
use tracing::{debug, trace};

use crate::config::{CarouselConfig, MotionPreference};
use crate::error::{CarouselError, ConfigurationError};
use crate::surface::{Activatable, Slide, Track};

/// Horizontal track offset that brings slide `index` into view.
///
/// One slide step is `measured_width + gap`. The track is shifted one full
/// step right of the naive `-(index * step)` so that a leading spacer slide
/// sits before index 0.
///
/// Returns `None` when the width is not measurable (zero, negative or
/// non-finite) or the resulting step is not finite.
///
/// ```
/// use afterglow_carousel::track_offset;
///
/// assert_eq!(track_offset(0, 300.0, 40.0), Some(340.0));
/// assert_eq!(track_offset(1, 300.0, 40.0), Some(0.0));
/// assert_eq!(track_offset(2, 300.0, 40.0), Some(-340.0));
/// assert_eq!(track_offset(2, 0.0, 40.0), None);
/// ```
#[must_use]
pub fn track_offset(index: usize, measured_width: f64, gap: f64) -> Option<f64> {
    if !measured_width.is_finite() || measured_width <= 0.0 {
        return None;
    }
    let step = measured_width + gap;
    if !step.is_finite() {
        return None;
    }
    Some(-(index as f64 * step) + step)
}

/// An auto-advancing carousel over host-owned slide, indicator and track surfaces.
///
/// Exactly one slide and its indicator are active at any time. The carousel
/// holds at most one live timer; every operation that starts auto-advance
/// first cancels the previous timer.
///
/// All operations are synchronous. Operations that touch the timer take the
/// host's [`Scheduler`] by reference, and the host routes fired timers back
/// through [`on_timer`](Self::on_timer).
///
/// A carousel that may still hold a timer should be torn down with
/// [`dispose`](Self::dispose) so the timer does not outlive it.
#[derive(Debug)]
pub struct SlideCarousel<S, I, T = ()> {
    slides: Vec<S>,
    indicators: Vec<I>,
    track: Option<T>,
    config: CarouselConfig,
    current: usize,
    timer: Option<TimerId>,
    hovered: bool,
    track_offset: Option<f64>,
}

impl<S: Slide, I: Activatable, T: Track> SlideCarousel<S, I, T> {
    /// Builds a carousel and activates the first slide.
    ///
    /// `indicators` must contain exactly one indicator per slide, in slide
    /// order. Without a `track` the carousel still tracks and marks the active
    /// slide but never writes a transform. Auto-advance is not started; call
    /// [`start_auto`](Self::start_auto) once the host is ready to deliver timers.
    pub fn new(
        slides: Vec<S>,
        indicators: Vec<I>,
        track: Option<T>,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(ConfigurationError::NoSlides.into());
        }
        if indicators.len() != slides.len() {
            return Err(ConfigurationError::IndicatorCountMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            }
            .into());
        }

        let mut carousel = Self {
            slides,
            indicators,
            track,
            config,
            current: 0,
            timer: None,
            hovered: false,
            track_offset: None,
        };
        for (i, (slide, indicator)) in carousel
            .slides
            .iter_mut()
            .zip(carousel.indicators.iter_mut())
            .enumerate()
        {
            slide.set_active(i == 0);
            indicator.set_active(i == 0);
        }
        carousel.apply_offset();
        debug!(slides = carousel.slides.len(), "carousel created");
        Ok(carousel)
    }

    /// Activates slide `index`.
    ///
    /// Fails with [`CarouselError::InvalidIndex`] and leaves all state
    /// untouched if `index` is not in `0..slide_count()`. Does not affect the
    /// auto-advance timer.
    pub fn move_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.activate(index);
        Ok(())
    }

    /// Starts (or restarts) auto-advance.
    ///
    /// Any running timer is cancelled first, so the countdown always begins
    /// fresh and at most one timer is ever live. Under
    /// [`MotionPreference::Reduced`] no timer is started.
    pub fn start_auto<Sch: Scheduler + ?Sized>(&mut self, scheduler: &mut Sch) {
        self.stop_auto(scheduler);
        if self.config.motion == MotionPreference::Reduced {
            debug!("reduced motion, auto-advance stays off");
            return;
        }
        let id = scheduler.schedule_repeating(self.config.period);
        self.timer = Some(id);
        debug!(%id, period = ?self.config.period, "auto-advance started");
    }

    /// Stops auto-advance. Safe to call when nothing is running.
    pub fn stop_auto<Sch: Scheduler + ?Sized>(&mut self, scheduler: &mut Sch) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
            debug!(%id, "auto-advance stopped");
        }
    }

    /// Handles a fired timer.
    ///
    /// If `id` is this carousel's live timer, advances to the next slide
    /// (wrapping to 0 after the last) and returns `true`. Ids of cancelled or
    /// foreign timers are ignored and return `false`, so a host may offer every
    /// fired id to every carousel it drives.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            trace!(%id, "ignoring timer not owned by this carousel");
            return false;
        }
        let next = (self.current + 1) % self.slides.len();
        trace!(%id, next, "auto-advance tick");
        self.activate(next);
        true
    }

    /// Handles a click on indicator `index`.
    ///
    /// Stops auto-advance, activates the slide, and starts a fresh
    /// auto-advance cycle from it. An invalid index fails without touching the
    /// timer.
    pub fn click_indicator<Sch: Scheduler + ?Sized>(
        &mut self,
        index: usize,
        scheduler: &mut Sch,
    ) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.stop_auto(scheduler);
        self.activate(index);
        self.start_auto(scheduler);
        Ok(())
    }

    /// Steps `delta` slides forward (or backward when negative), wrapping at
    /// both ends, and restarts the auto-advance cycle like an indicator click.
    pub fn navigate<Sch: Scheduler + ?Sized>(&mut self, delta: isize, scheduler: &mut Sch) {
        let len = self.slides.len();
        let step = delta.unsigned_abs() % len;
        let target = if delta >= 0 {
            (self.current + step) % len
        } else {
            (self.current + len - step) % len
        };
        self.stop_auto(scheduler);
        self.activate(target);
        self.start_auto(scheduler);
    }

    /// The pointer entered the track. Pauses auto-advance when
    /// [`CarouselConfig::pause_on_hover`] is set.
    pub fn pointer_enter<Sch: Scheduler + ?Sized>(&mut self, scheduler: &mut Sch) {
        self.hovered = true;
        if self.config.pause_on_hover {
            self.stop_auto(scheduler);
        }
    }

    /// The pointer left the track. Resumes auto-advance when
    /// [`CarouselConfig::pause_on_hover`] is set.
    pub fn pointer_leave<Sch: Scheduler + ?Sized>(&mut self, scheduler: &mut Sch) {
        self.hovered = false;
        if self.config.pause_on_hover {
            self.start_auto(scheduler);
        }
    }

    /// Applies a new motion preference.
    ///
    /// Switching to [`MotionPreference::Reduced`] stops auto-advance. Switching
    /// back to [`MotionPreference::Full`] restarts it, unless the track is
    /// hovered and hover pauses the carousel.
    pub fn set_motion_preference<Sch: Scheduler + ?Sized>(
        &mut self,
        motion: MotionPreference,
        scheduler: &mut Sch,
    ) {
        if self.config.motion == motion {
            return;
        }
        self.config.motion = motion;
        match motion {
            MotionPreference::Reduced => self.stop_auto(scheduler),
            MotionPreference::Full => {
                if !(self.hovered && self.config.pause_on_hover) {
                    self.start_auto(scheduler);
                }
            }
        }
    }

    /// Re-measures the slides and rewrites the track transform for the current slide.
    ///
    /// Hosts call this after layout changes (initial load, resize).
    pub fn relayout(&mut self) {
        self.apply_offset();
    }

    /// Tears the carousel down, cancelling its timer, and returns the surfaces.
    pub fn dispose<Sch: Scheduler + ?Sized>(
        mut self,
        scheduler: &mut Sch,
    ) -> (Vec<S>, Vec<I>, Option<T>) {
        self.stop_auto(scheduler);
        debug!("carousel disposed");
        (self.slides, self.indicators, self.track)
    }

    fn check_index(&self, index: usize) -> Result<(), CarouselError> {
        let len = self.slides.len();
        if index < len {
            Ok(())
        } else {
            Err(CarouselError::InvalidIndex { index, len })
        }
    }

    /// Moves the active marker to `index`, which must be in range.
    fn activate(&mut self, index: usize) {
        let previous = self.current;
        if previous != index {
            self.slides[previous].set_active(false);
            self.indicators[previous].set_active(false);
        }
        self.slides[index].set_active(true);
        self.indicators[index].set_active(true);
        self.current = index;
        self.apply_offset();
        debug!(from = previous, to = index, "slide activated");
    }

    fn apply_offset(&mut self) {
        let Some(track) = self.track.as_mut() else {
            return;
        };
        let width = self.slides[0].measured_width();
        match track_offset(self.current, width, self.config.slide_gap) {
            Some(offset) => {
                track.set_transform(Affine::translate((offset, 0.0)));
                self.track_offset = Some(offset);
            }
            None => debug!(width, "slide width not measurable, track left in place"),
        }
    }
}

impl<S, I, T> SlideCarousel<S, I, T> {
    /// Index of the active slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides (and indicators).
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if slide `index` (and its indicator) is the active one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Returns `true` while an auto-advance timer is live.
    #[must_use]
    pub fn is_auto_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The live auto-advance timer, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Returns `true` while the pointer is over the track.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The offset most recently written to the track.
    ///
    /// `None` if there is no track or no measurable width has been seen yet.
    /// When a later width is unmeasurable this keeps reporting the offset the
    /// track still shows.
    #[must_use]
    pub fn track_offset(&self) -> Option<f64> {
        self.track_offset
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The slide surfaces, in order.
    #[must_use]
    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// The indicator surfaces, in slide order.
    #[must_use]
    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    /// The track surface, if one was supplied.
    #[must_use]
    pub fn track(&self) -> Option<&T> {
        self.track.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Debug, Default)]
    struct Flag(bool);

    impl Activatable for Flag {
        fn set_active(&mut self, active: bool) {
            self.0 = active;
        }
    }

    impl Slide for Flag {
        fn measured_width(&self) -> f64 {
            100.0
        }
    }

    fn flags(n: usize) -> Vec<Flag> {
        (0..n).map(|_| Flag::default()).collect()
    }

    #[test]
    fn offset_rejects_unmeasurable_widths() {
        assert_eq!(track_offset(1, 0.0, 40.0), None);
        assert_eq!(track_offset(1, -5.0, 40.0), None);
        assert_eq!(track_offset(1, f64::NAN, 40.0), None);
        assert_eq!(track_offset(1, f64::INFINITY, 40.0), None);
        assert_eq!(track_offset(1, f64::MAX, f64::MAX), None);
    }

    #[test]
    fn offset_without_gap() {
        assert_eq!(track_offset(3, 200.0, 0.0), Some(-400.0));
    }

    #[test]
    fn construction_activates_first_pair() {
        let carousel: SlideCarousel<Flag, Flag> =
            SlideCarousel::new(flags(3), flags(3), None, CarouselConfig::new()).unwrap();
        assert_eq!(carousel.current_index(), 0);
        let slides: Vec<bool> = carousel.slides().iter().map(|f| f.0).collect();
        let dots: Vec<bool> = carousel.indicators().iter().map(|f| f.0).collect();
        assert_eq!(slides, vec![true, false, false]);
        assert_eq!(dots, vec![true, false, false]);
        assert!(!carousel.is_auto_running());
        assert_eq!(carousel.track_offset(), None);
    }

    #[test]
    fn invalid_index_leaves_state_alone() {
        let mut carousel: SlideCarousel<Flag, Flag> =
            SlideCarousel::new(flags(2), flags(2), None, CarouselConfig::new()).unwrap();
        carousel.move_to(1).unwrap();
        assert_eq!(
            carousel.move_to(2),
            Err(CarouselError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.slides()[1].0);
        assert!(!carousel.slides()[0].0);
    }

    #[test]
    fn single_slide_ticks_stay_on_zero() {
        let mut carousel: SlideCarousel<Flag, Flag> =
            SlideCarousel::new(flags(1), flags(1), None, CarouselConfig::new()).unwrap();
        carousel.timer = Some(TimerId::from_raw(0));
        assert!(carousel.on_timer(TimerId::from_raw(0)));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.slides()[0].0);
    }
}
