// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use core::time::Duration;

/// Default auto-advance period.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(4_000);

/// Default gap between adjacent slides, in layout units.
pub const DEFAULT_SLIDE_GAP: f64 = 40.0;

/// The user's motion preference, typically mirrored from the platform's
/// "reduce motion" accessibility setting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MotionPreference {
    /// Slides advance on their own.
    #[default]
    Full,
    /// Slides only change in response to the user; auto-advance stays off.
    Reduced,
}

/// Tunables for a [`SlideCarousel`](crate::SlideCarousel).
///
/// ```
/// use core::time::Duration;
/// use afterglow_carousel::{CarouselConfig, MotionPreference};
///
/// let config = CarouselConfig::new()
///     .with_period(Duration::from_secs(3))
///     .with_pause_on_hover(false)
///     .with_motion(MotionPreference::Reduced);
/// assert_eq!(config.slide_gap, 40.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Time between automatic advances.
    pub period: Duration,
    /// Gap between adjacent slides on the track, in layout units.
    pub slide_gap: f64,
    /// Whether hovering the track pauses auto-advance.
    pub pause_on_hover: bool,
    /// Whether auto-advance is allowed at all.
    pub motion: MotionPreference,
}

impl CarouselConfig {
    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            slide_gap: DEFAULT_SLIDE_GAP,
            pause_on_hover: true,
            motion: MotionPreference::Full,
        }
    }

    /// Sets the auto-advance period.
    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Sets the gap between adjacent slides.
    #[must_use]
    pub const fn with_slide_gap(mut self, slide_gap: f64) -> Self {
        self.slide_gap = slide_gap;
        self
    }

    /// Enables or disables pause-on-hover.
    #[must_use]
    pub const fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// Sets the motion preference.
    #[must_use]
    pub const fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}
