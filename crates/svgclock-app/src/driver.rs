use std::{future::Future, path::PathBuf};

use log::{debug, info};
use masterror::{AppError, AppResult};
use svgclock_core::{
    Clock, ClockContext,
    event_bus::{BusEvent, EventBus, EventBusError},
};
use tokio::io::AsyncWriteExt;

/// Destination of rendered frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Output {
    /// One SVG document per line on standard output.
    Stdout,
    /// File rewritten on every frame.
    File(PathBuf),
}

impl Output {
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    pub(crate) async fn write_frame(&self, svg: &str) -> AppResult<()> {
        match self {
            Self::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(svg.as_bytes()).await.map_err(write_error)?;
                stdout.write_all(b"\n").await.map_err(write_error)?;
                stdout.flush().await.map_err(write_error)
            }
            Self::File(path) => tokio::fs::write(path, svg).await.map_err(|err| {
                AppError::internal(format!("Failed to write {}: {err}", path.display()))
            }),
        }
    }
}

fn write_error(err: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write frame to stdout: {err}"))
}

/// Pumps bus events into the clock and writes a frame on every redraw.
pub(crate) struct Driver {
    bus: EventBus,
    clock: Clock,
    output: Output,
}

impl Driver {
    pub(crate) fn new(bus: EventBus, clock: Clock, output: Output) -> Self {
        Self {
            bus,
            clock,
            output,
        }
    }

    pub(crate) fn mount(&mut self, ctx: &ClockContext) {
        self.clock.mount(ctx);
    }

    /// Apply every queued event. Returns whether a redraw was requested.
    fn pump(&mut self) -> Result<bool, EventBusError> {
        let mut redraw = false;

        loop {
            let events = self.bus.drain()?;
            if events.is_empty() {
                return Ok(redraw);
            }

            for event in events {
                match event {
                    BusEvent::Redraw => redraw = true,
                    BusEvent::Clock(message) => self.clock.update(message),
                    _ => {}
                }
            }
        }
    }

    /// Run until `shutdown` resolves, then unmount the clock.
    ///
    /// Shutdown is observed while waiting for events and while a frame is
    /// being written, so a blocked output does not keep the process alive.
    pub(crate) async fn run(mut self, shutdown: impl Future<Output = ()>) -> AppResult<()> {
        tokio::pin!(shutdown);

        let result = loop {
            tokio::select! {
                _ = &mut shutdown => break Ok(()),
                _ = self.bus.wait() => {}
            }

            let redraw = match self.pump() {
                Ok(redraw) => redraw,
                Err(err) => break Err(AppError::from(err)),
            };
            if !redraw {
                continue;
            }

            let frame = self.clock.view();
            debug!("Writing frame for {}", self.clock.time());

            tokio::select! {
                _ = &mut shutdown => break Ok(()),
                written = self.output.write_frame(&frame) => {
                    if let Err(err) = written {
                        break Err(err);
                    }
                }
            }
        };

        info!("Shutting down clock");

        self.clock.unmount();
        result
    }
}
