use tokio::runtime::Handle;

use crate::clock::ClockMessage;
use crate::event_bus::{BusEvent, EventBusError, EventSender};

/// Runtime handle and event sender handed to a [`Clock`](crate::Clock) when
/// it is mounted.
///
/// Tasks spawned through [`ClockContext::runtime_handle`] are aborted by
/// their owner on unmount. Publishing is synchronous, so an aborted task
/// never leaves a half-published event in the queue.
#[derive(Debug, Clone)]
pub struct ClockContext {
    event_sender: EventSender,
    runtime_handle: Handle,
}

impl ClockContext {
    /// Create a new context bound to the provided event sender and runtime handle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use svgclock_core::{event_bus::EventBus, context::ClockContext};
    /// # use std::num::NonZeroUsize;
    /// # let runtime = tokio::runtime::Runtime::new().expect("runtime");
    /// let bus = EventBus::new(NonZeroUsize::new(4).expect("capacity"));
    /// let context = ClockContext::new(bus.sender(), runtime.handle().clone());
    /// # drop(context);
    /// ```
    pub fn new(event_sender: EventSender, runtime_handle: Handle) -> Self {
        Self {
            event_sender,
            runtime_handle,
        }
    }

    pub fn runtime_handle(&self) -> &Handle {
        &self.runtime_handle
    }

    /// Request a redraw of the rendered clock.
    ///
    /// # Postconditions
    ///
    /// - Enqueues a [`BusEvent::Redraw`] if the bus has remaining capacity, otherwise
    ///   returns [`EventBusError::QueueFull`].
    pub fn request_redraw(&self) -> Result<(), EventBusError> {
        self.event_sender.try_send(BusEvent::Redraw)
    }

    /// Sender used by the tick task to deliver [`ClockMessage`]s.
    pub fn clock_sender(&self) -> ClockEventSender {
        ClockEventSender {
            event_sender: self.event_sender.clone(),
        }
    }
}

/// Typed sender wrapping [`ClockMessage`] into [`BusEvent::Clock`].
#[derive(Debug, Clone)]
pub struct ClockEventSender {
    event_sender: EventSender,
}

impl ClockEventSender {
    pub fn try_send(&self, message: ClockMessage) -> Result<(), EventBusError> {
        self.event_sender.try_send(BusEvent::Clock(message))
    }
}
