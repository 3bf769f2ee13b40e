mod driver;
mod logging;

use std::{backtrace::Backtrace, num::NonZeroUsize, panic, path::PathBuf};

use clap::Parser;
use flexi_logger::LoggerHandle;
use log::{debug, error, info};
use masterror::AppResult;
use svgclock_core::{
    Clock, ClockContext, ClockOptions, ClockStatus,
    config::{Config, ConfigReadError, PresetTheme, ThemeSelector, TimeOfDay, get_config},
    event_bus::EventBus,
};

use crate::driver::{Driver, Output};

const BUS_CAPACITY: NonZeroUsize = NonZeroUsize::new(64).expect("non-zero bus capacity");

/// Render an analog clock as SVG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,

    /// Width and height of the SVG in pixels.
    #[arg(short, long)]
    diameter: Option<u32>,

    /// Fixed `h:m:s` time to display; the clock does not tick.
    #[arg(short, long, conflicts_with = "start")]
    time: Option<TimeOfDay>,

    /// `h:m:s` time a ticking clock starts from instead of the wall clock.
    #[arg(short, long)]
    start: Option<TimeOfDay>,

    /// Preset theme name.
    #[arg(long)]
    theme: Option<String>,

    /// File to write frames to instead of stdout.
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    output: Option<PathBuf>,

    /// Hide the hour numerals.
    #[arg(long)]
    no_numerals: bool,

    /// Render a single frame and exit.
    #[arg(long)]
    once: bool,

    /// Print the preset theme names and exit.
    #[arg(long)]
    list_themes: bool,
}

impl Args {
    /// Command line values take precedence over the config file.
    fn apply_to(&self, config: &mut Config) {
        if let Some(diameter) = self.diameter {
            config.clock.diameter = diameter;
        }
        if let Some(time) = self.time {
            config.clock.time = Some(time);
            config.clock.start = None;
        }
        if let Some(start) = self.start {
            config.clock.start = Some(start);
            config.clock.time = None;
        }
        if let Some(theme) = &self.theme {
            config.clock.theme = Some(ThemeSelector::from(theme.as_str()));
        }
        if let Some(output) = &self.output {
            config.output = Some(output.to_string_lossy().into_owned());
        }
        if self.no_numerals {
            config.clock.numerals = false;
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.list_themes {
        for preset in PresetTheme::ALL {
            println!("{}", preset.name());
        }
        return;
    }

    let logger = match logging::start() {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            std::process::exit(1);
        }
    };
    debug!("args: {args:?}");

    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));

    if let Err(err) = run(args, &logger).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args, logger: &LoggerHandle) -> AppResult<()> {
    let (mut config, config_path) = get_config(args.config_path.clone())?;
    logger.set_new_spec(logging::get_log_spec(&config.log_level));
    info!("Using config {config_path:?}");

    args.apply_to(&mut config);
    config.validate().map_err(ConfigReadError::from)?;

    let output = Output::new(config.output.as_ref().map(PathBuf::from));
    let clock = Clock::new(ClockOptions::from(&config.clock));

    if args.once || clock.status() == ClockStatus::Stopped {
        return output.write_frame(&clock.view()).await;
    }

    let bus = EventBus::new(BUS_CAPACITY);
    let ctx = ClockContext::new(bus.sender(), tokio::runtime::Handle::current());

    let mut driver = Driver::new(bus, clock, output);
    driver.mount(&ctx);
    driver.run(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}
