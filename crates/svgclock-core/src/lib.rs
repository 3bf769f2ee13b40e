pub mod clock;
pub mod config;
pub mod context;
pub mod event_bus;
pub mod geometry;
pub mod render;
pub mod theme;
pub mod time;

pub use clock::{Clock, ClockMessage, ClockOptions, ClockStatus};
pub use context::{ClockContext, ClockEventSender};
