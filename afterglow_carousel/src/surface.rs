// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side surfaces a carousel writes its visual state into.
//!
//! A carousel never creates or lays out visuals. The host owns slide panels,
//! indicator dots and the scrolling track, wraps them in types implementing
//! these traits, and hands them to [`SlideCarousel::new`](crate::SlideCarousel::new).
//! From then on the carousel is the only writer of their active flags and of
//! the track transform.

use kurbo::Affine;

/// A visual that can be marked active or inactive.
pub trait Activatable {
    /// Sets or clears the active marker.
    fn set_active(&mut self, active: bool);
}

/// One slide panel.
pub trait Slide: Activatable {
    /// Rendered width of the slide in layout units.
    ///
    /// Zero, negative or non-finite widths mean the slide has not been laid
    /// out yet. The carousel then leaves the track transform untouched.
    fn measured_width(&self) -> f64;
}

/// The container that slides sit on, translated to bring the active slide into view.
pub trait Track {
    /// Replaces the track's transform.
    ///
    /// Carousels only ever write pure horizontal translations.
    fn set_transform(&mut self, transform: Affine);
}

/// A track that discards transforms, for carousels without a scrolling container.
impl Track for () {
    fn set_transform(&mut self, _transform: Affine) {}
}

impl<A: Activatable + ?Sized> Activatable for &mut A {
    fn set_active(&mut self, active: bool) {
        (**self).set_active(active);
    }
}

impl<S: Slide + ?Sized> Slide for &mut S {
    fn measured_width(&self) -> f64 {
        (**self).measured_width()
    }
}

impl<T: Track + ?Sized> Track for &mut T {
    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }
}
