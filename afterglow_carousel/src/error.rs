// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A carousel was assembled from surfaces that cannot form a valid carousel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No slides were supplied.
    NoSlides,
    /// The number of indicators differs from the number of slides.
    IndicatorCountMismatch {
        /// Number of slides supplied.
        slides: usize,
        /// Number of indicators supplied.
        indicators: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => f.write_str("a carousel needs at least one slide"),
            Self::IndicatorCountMismatch { slides, indicators } => write!(
                f,
                "expected one indicator per slide, got {indicators} indicators for {slides} slides"
            ),
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// Errors returned by [`SlideCarousel`](crate::SlideCarousel).
///
/// Both variants are caller mistakes: retrying the same call will fail again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarouselError {
    /// Construction was rejected.
    Configuration(ConfigurationError),
    /// A slide index outside `0..len` was requested.
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The number of slides.
        len: usize,
    },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid carousel configuration: {err}"),
            Self::InvalidIndex { index, len } => {
                write!(f, "slide index {index} is out of range for {len} slides")
            }
        }
    }
}

impl core::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::InvalidIndex { .. } => None,
        }
    }
}

impl From<ConfigurationError> for CarouselError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}
