// Copyright 2026 the Afterglow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless carousel host.
//!
//! Drives a slide carousel over simulated time the way a page runtime would:
//! each frame advances a `TimerQueue`, fired timers are routed to the
//! carousel, and scripted clicks and hovers stand in for the user.
//!
//! Run:
//! - `cargo run -p afterglow_demos -- --slides 4 --click 5000:2 --hover 9000..15000`
//! - `RUST_LOG=afterglow_carousel=debug cargo run -p afterglow_demos`

use std::time::Duration;

use afterglow_carousel::{
    Activatable, CarouselConfig, MotionPreference, Slide, SlideCarousel, Track,
};
use afterglow_timing::TimerQueue;
use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::Affine;
use tracing::info;
use tracing_subscriber::EnvFilter;

const TITLES: [&str; 4] = [
    "Most curated house party experience",
    "Where strangers become stories",
    "The city's best kept secret",
    "The vibe you've been searching for",
];

#[derive(Parser, Debug)]
#[command(about = "Drive a slide carousel over simulated time")]
struct Args {
    /// Number of slides.
    #[arg(long, default_value_t = 4)]
    slides: usize,
    /// Auto-advance period in milliseconds.
    #[arg(long, default_value_t = 4_000)]
    period_ms: u64,
    /// Rendered slide width.
    #[arg(long, default_value_t = 300.0)]
    width: f64,
    /// Gap between slides.
    #[arg(long, default_value_t = 40.0)]
    gap: f64,
    /// Simulated run time in milliseconds.
    #[arg(long, default_value_t = 20_000)]
    duration_ms: u64,
    /// Frame length in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Indicator click as `AT_MS:INDEX`; may be repeated.
    #[arg(long, value_parser = parse_click)]
    click: Vec<Click>,
    /// Pointer over the track as `ENTER_MS..LEAVE_MS`.
    #[arg(long, value_parser = parse_hover)]
    hover: Option<Hover>,
    /// Behave as if the user asked for reduced motion.
    #[arg(long)]
    reduced_motion: bool,
    /// Keep advancing while the track is hovered.
    #[arg(long)]
    no_hover_pause: bool,
}

#[derive(Copy, Clone, Debug)]
struct Click {
    at: Duration,
    index: usize,
}

#[derive(Copy, Clone, Debug)]
struct Hover {
    enter: Duration,
    leave: Duration,
}

fn parse_click(arg: &str) -> Result<Click> {
    let (at, index) = arg
        .split_once(':')
        .with_context(|| format!("expected AT_MS:INDEX, got `{arg}`"))?;
    Ok(Click {
        at: Duration::from_millis(at.parse().context("invalid click time")?),
        index: index.parse().context("invalid indicator index")?,
    })
}

fn parse_hover(arg: &str) -> Result<Hover> {
    let (enter, leave) = arg
        .split_once("..")
        .with_context(|| format!("expected ENTER_MS..LEAVE_MS, got `{arg}`"))?;
    let hover = Hover {
        enter: Duration::from_millis(enter.parse().context("invalid enter time")?),
        leave: Duration::from_millis(leave.parse().context("invalid leave time")?),
    };
    if hover.leave < hover.enter {
        bail!("hover leaves before it enters: `{arg}`");
    }
    Ok(hover)
}

#[derive(Debug)]
struct Card {
    title: String,
    width: f64,
    active: bool,
}

impl Activatable for Card {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Slide for Card {
    fn measured_width(&self) -> f64 {
        self.width
    }
}

#[derive(Debug, Default)]
struct Dot {
    active: bool,
}

impl Activatable for Dot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[derive(Debug, Default)]
struct Strip {
    offset: f64,
}

impl Track for Strip {
    fn set_transform(&mut self, transform: Affine) {
        self.offset = transform.translation().x;
    }
}

#[derive(Copy, Clone, Debug)]
enum Input {
    Click(usize),
    Enter,
    Leave,
}

fn script(args: &Args) -> Vec<(Duration, Input)> {
    let mut events: Vec<_> = args
        .click
        .iter()
        .map(|click| (click.at, Input::Click(click.index)))
        .collect();
    if let Some(hover) = args.hover {
        events.push((hover.enter, Input::Enter));
        events.push((hover.leave, Input::Leave));
    }
    events.sort_by_key(|(at, _)| *at);
    events
}

fn dots(carousel: &SlideCarousel<Card, Dot, Strip>) -> String {
    carousel
        .indicators()
        .iter()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.frame_ms == 0 {
        bail!("--frame-ms must be at least 1");
    }

    let config = CarouselConfig::new()
        .with_period(Duration::from_millis(args.period_ms))
        .with_slide_gap(args.gap)
        .with_pause_on_hover(!args.no_hover_pause)
        .with_motion(if args.reduced_motion {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        });
    let slides: Vec<Card> = (0..args.slides)
        .map(|i| Card {
            title: TITLES[i % TITLES.len()].to_owned(),
            width: args.width,
            active: false,
        })
        .collect();
    let indicators: Vec<Dot> = (0..args.slides).map(|_| Dot::default()).collect();

    let mut timers = TimerQueue::new();
    let mut carousel = SlideCarousel::new(slides, indicators, Some(Strip::default()), config)
        .context("failed to build carousel")?;
    carousel.start_auto(&mut timers);

    let mut pending = script(&args).into_iter().peekable();
    let frame = Duration::from_millis(args.frame_ms);
    let end = Duration::from_millis(args.duration_ms);
    let mut now = Duration::ZERO;
    let mut shown = usize::MAX;

    while now <= end {
        while let Some((_, input)) = pending.next_if(|(at, _)| *at <= now) {
            match input {
                Input::Click(index) => carousel
                    .click_indicator(index, &mut timers)
                    .with_context(|| format!("click at {now:?}"))?,
                Input::Enter => carousel.pointer_enter(&mut timers),
                Input::Leave => carousel.pointer_leave(&mut timers),
            }
            info!(at = ?now, ?input, auto = carousel.is_auto_running(), "input");
        }

        for id in timers.advance_to(now) {
            carousel.on_timer(id);
        }

        if carousel.current_index() != shown {
            shown = carousel.current_index();
            let active = &carousel.slides()[shown];
            info!(
                at = ?now,
                dots = %dots(&carousel),
                offset = carousel.track().map_or(0.0, |strip| strip.offset),
                active = active.active,
                "{}",
                active.title
            );
        }
        now += frame;
    }

    let (slides, _, _) = carousel.dispose(&mut timers);
    info!(
        slides = slides.len(),
        live_timers = timers.len(),
        "carousel disposed"
    );
    Ok(())
}
