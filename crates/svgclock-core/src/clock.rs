mod ticker;

use log::{debug, error};
use svgclock_proto::config::{ClockConfig, DEFAULT_DIAMETER, Theme, ThemeSelector, TimeOfDay};
use tokio::time::Instant;

pub use ticker::TICK_INTERVAL;

use crate::{
    ClockContext,
    render::{RenderSpec, render_svg},
    theme::configure_theme,
    time::current_time,
};
use ticker::Ticker;

/// Whether the clock follows the wall clock or shows a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    Ticking,
    Stopped,
}

impl ClockStatus {
    /// A fixed time stops the clock; no fixed time means it ticks.
    pub fn for_time(fixed: Option<&TimeOfDay>) -> Self {
        match fixed {
            Some(_) => Self::Stopped,
            None => Self::Ticking,
        }
    }
}

/// Messages delivered to the clock through the event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMessage {
    /// Re-read the time source and redraw.
    Tick,
}

/// Construction-time options of a [`Clock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOptions {
    pub diameter: u32,
    /// Fixed time; the clock is stopped when set.
    pub time:     Option<TimeOfDay>,
    /// Start time of a ticking clock that does not follow the wall clock.
    pub start:    Option<TimeOfDay>,
    pub theme:    Option<ThemeSelector>,
    pub numerals: bool,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            time:     None,
            start:    None,
            theme:    None,
            numerals: true,
        }
    }
}

impl From<&ClockConfig> for ClockOptions {
    fn from(config: &ClockConfig) -> Self {
        Self {
            diameter: config.diameter,
            time:     config.time,
            start:    config.start,
            theme:    config.theme.clone(),
            numerals: config.numerals,
        }
    }
}

/// Where a ticking clock reads the time it displays.
///
/// Both sources are read when a tick is applied, not when it is published,
/// so ticks dropped by a full bus never leave the clock behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeSource {
    /// The local wall clock.
    Local,
    /// `start` plus the whole seconds the runtime clock has advanced since
    /// `since`.
    Elapsed { start: TimeOfDay, since: Instant },
}

impl TimeSource {
    fn read(&self) -> TimeOfDay {
        match *self {
            Self::Local => current_time(),
            Self::Elapsed { start, since } => start.advanced(since.elapsed().as_secs()),
        }
    }
}

/// Analog clock component.
///
/// The theme is resolved once at construction. A ticking clock starts its
/// one-second timer on [`Clock::mount`] and stops it on [`Clock::unmount`]
/// or when dropped.
#[derive(Debug)]
pub struct Clock {
    diameter: u32,
    numerals: bool,
    theme:    Theme,
    time:     TimeOfDay,
    status:   ClockStatus,
    source:   TimeSource,
    ticker:   Ticker,
    context:  Option<ClockContext>,
}

impl Clock {
    pub fn new(options: ClockOptions) -> Self {
        let status = ClockStatus::for_time(options.time.as_ref());
        let source = match options.start {
            Some(start) => TimeSource::Elapsed {
                start,
                since: Instant::now(),
            },
            None => TimeSource::Local,
        };
        let time = options.time.unwrap_or_else(|| source.read());

        debug!("Creating {status:?} clock at {time} ({}px)", options.diameter);

        Self {
            diameter: options.diameter,
            numerals: options.numerals,
            theme: configure_theme(options.theme.as_ref()),
            time,
            status,
            source,
            ticker: Ticker::default(),
            context: None,
        }
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn status(&self) -> ClockStatus {
        self.status
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Whether the tick task is currently running.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Attach the clock to a runtime and request the first frame.
    ///
    /// Only a [`ClockStatus::Ticking`] clock spawns its timer. Mounting again
    /// replaces the previous timer. A clock with a start time counts elapsed
    /// seconds from the displayed time at mount.
    pub fn mount(&mut self, ctx: &ClockContext) {
        if self.status == ClockStatus::Ticking {
            if let TimeSource::Elapsed { start, since } = &mut self.source {
                *start = self.time;
                *since = Instant::now();
            }

            self.ticker.spawn(ctx, ctx.clock_sender());
        }

        self.context = Some(ctx.clone());
        self.request_redraw();
    }

    /// Cancel the timer and detach from the runtime.
    pub fn unmount(&mut self) {
        self.ticker.abort();
        self.context = None;
    }

    pub fn update(&mut self, message: ClockMessage) {
        match message {
            ClockMessage::Tick => {
                if self.status == ClockStatus::Stopped {
                    debug!("Ignoring tick for a stopped clock");
                    return;
                }

                self.time = self.source.read();
                self.request_redraw();
            }
        }
    }

    /// Render the current frame as an SVG document.
    pub fn view(&self) -> String {
        render_svg(&RenderSpec {
            diameter: self.diameter,
            time:     self.time,
            theme:    &self.theme,
            numerals: self.numerals,
        })
    }

    fn request_redraw(&self) {
        if let Some(ctx) = &self.context
            && let Err(err) = ctx.request_redraw()
        {
            error!("Failed to request clock redraw: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, time::Duration};

    use svgclock_proto::config::{DEFAULT_THEME, PresetTheme};
    use tokio::time::sleep;

    use super::*;
    use crate::event_bus::{BusEvent, EventBus};

    fn clock_context_with_capacity(capacity: usize) -> (ClockContext, EventBus) {
        let bus = EventBus::new(NonZeroUsize::new(capacity).expect("non-zero capacity"));
        let ctx = ClockContext::new(bus.sender(), tokio::runtime::Handle::current());

        (ctx, bus)
    }

    fn clock_context() -> (ClockContext, EventBus) {
        clock_context_with_capacity(16)
    }

    fn apply_events(clock: &mut Clock, bus: &EventBus) -> usize {
        let mut ticks = 0;

        for event in bus.drain().expect("drain bus") {
            if let BusEvent::Clock(message) = event {
                ticks += 1;
                clock.update(message);
            }
        }

        ticks
    }

    fn time(value: &str) -> TimeOfDay {
        value.parse().expect("valid time")
    }

    fn fixed(value: &str) -> ClockOptions {
        ClockOptions {
            time: Some(time(value)),
            ..Default::default()
        }
    }

    fn starting_at(value: &str) -> ClockOptions {
        ClockOptions {
            start: Some(time(value)),
            ..Default::default()
        }
    }

    #[test]
    fn default_options_use_default_theme_and_diameter() {
        let options = ClockOptions::default();
        assert_eq!(options.diameter, DEFAULT_DIAMETER);

        let clock = Clock::new(options);
        assert_eq!(clock.theme(), &DEFAULT_THEME);
        assert_eq!(clock.diameter(), DEFAULT_DIAMETER);
    }

    #[test]
    fn status_follows_fixed_time() {
        assert_eq!(Clock::new(fixed("12:30")).status(), ClockStatus::Stopped);
        assert_eq!(Clock::new(ClockOptions::default()).status(), ClockStatus::Ticking);
        assert_eq!(Clock::new(starting_at("10:00")).status(), ClockStatus::Ticking);
    }

    #[test]
    fn resolves_theme_once_at_construction() {
        let clock = Clock::new(ClockOptions {
            theme: Some(ThemeSelector::from("light")),
            ..Default::default()
        });

        assert_eq!(clock.theme(), &PresetTheme::Light.theme());
    }

    #[test]
    fn options_are_built_from_config() {
        let config = ClockConfig {
            diameter: 64,
            start: Some(time("8:00")),
            numerals: false,
            ..Default::default()
        };

        let options = ClockOptions::from(&config);
        assert_eq!(options.diameter, 64);
        assert!(!options.numerals);
        assert_eq!(options.time, None);
        assert_eq!(options.start, Some(time("8:00")));
    }

    #[test]
    fn view_renders_sized_svg() {
        let clock = Clock::new(ClockOptions {
            diameter: 100,
            ..fixed("12:30")
        });

        let svg = clock.view();
        assert!(svg.contains("width=\"100\" height=\"100\" viewBox=\"0 0 100 100\""));
        assert!(svg.contains("width: 100px;"));
        assert!(svg.contains("height: 100px;"));
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_time_never_changes() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(fixed("12:30"));
        clock.mount(&ctx);

        assert!(!clock.is_ticking());

        sleep(Duration::from_millis(1100)).await;
        assert_eq!(apply_events(&mut clock, &bus), 0);

        assert_eq!(clock.status(), ClockStatus::Stopped);
        assert_eq!(clock.time(), time("12:30:0"));
    }

    #[tokio::test(start_paused = true)]
    async fn live_clock_advances_one_second() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(starting_at("12:30:59"));
        let initial = clock.time();
        clock.mount(&ctx);

        assert!(clock.is_ticking());

        sleep(Duration::from_millis(1100)).await;
        assert_eq!(apply_events(&mut clock, &bus), 1);

        assert_eq!(clock.status(), ClockStatus::Ticking);
        assert_eq!(clock.time(), initial.tick());
        assert_eq!(clock.time(), time("12:31:0"));
    }

    #[test]
    fn wall_clock_tick_reads_local_time() {
        let mut clock = Clock::new(ClockOptions::default());

        let before = current_time();
        clock.update(ClockMessage::Tick);
        let after = current_time();

        assert!(clock.time() == before || clock.time() == after);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_requests_redraw() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(ClockOptions::default());
        clock.mount(&ctx);

        assert_eq!(bus.drain().expect("drain"), vec![BusEvent::Redraw]);

        clock.update(ClockMessage::Tick);
        assert_eq!(bus.drain().expect("drain"), vec![BusEvent::Redraw]);
    }

    #[test]
    fn stopped_clock_ignores_ticks() {
        let mut clock = Clock::new(fixed("23:59:59"));
        clock.update(ClockMessage::Tick);

        assert_eq!(clock.time(), time("23:59:59"));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_timer() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(ClockOptions::default());
        let initial = clock.time();
        clock.mount(&ctx);
        clock.unmount();

        assert!(!clock.is_ticking());

        sleep(Duration::from_secs(3)).await;
        assert_eq!(apply_events(&mut clock, &bus), 0);
        assert_eq!(clock.time(), initial);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_clock_cancels_timer() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(ClockOptions::default());
        clock.mount(&ctx);
        drop(clock);

        sleep(Duration::from_secs(3)).await;

        let ticks = bus
            .drain()
            .expect("drain bus")
            .into_iter()
            .filter(|event| matches!(event, BusEvent::Clock(ClockMessage::Tick)))
            .count();
        assert_eq!(ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_seconds_match_ticks() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(starting_at("10:00"));
        clock.mount(&ctx);

        sleep(Duration::from_millis(5500)).await;
        assert_eq!(apply_events(&mut clock, &bus), 5);
        assert_eq!(clock.time(), time("10:0:5"));
    }

    #[tokio::test(start_paused = true)]
    async fn full_bus_does_not_lose_seconds() {
        let (ctx, bus) = clock_context_with_capacity(4);
        let mut clock = Clock::new(starting_at("10:00"));
        clock.mount(&ctx);

        // the mount redraw and three ticks fill the queue, later ticks are dropped
        sleep(Duration::from_millis(10_500)).await;
        assert_eq!(apply_events(&mut clock, &bus), 3);
        assert_eq!(clock.time(), time("10:0:10"));

        sleep(Duration::from_secs(1)).await;
        assert_eq!(apply_events(&mut clock, &bus), 1);
        assert_eq!(clock.time(), time("10:0:11"));
    }

    #[tokio::test(start_paused = true)]
    async fn remount_counts_from_displayed_time() {
        let (ctx, bus) = clock_context();
        let mut clock = Clock::new(starting_at("10:00"));
        clock.mount(&ctx);

        sleep(Duration::from_millis(2500)).await;
        apply_events(&mut clock, &bus);
        clock.unmount();

        sleep(Duration::from_secs(30)).await;
        clock.mount(&ctx);

        sleep(Duration::from_millis(1500)).await;
        apply_events(&mut clock, &bus);
        assert_eq!(clock.time(), time("10:0:3"));
    }
}
