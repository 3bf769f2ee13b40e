use std::time::Duration;

use log::warn;
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

use super::ClockMessage;
use crate::{ClockContext, ClockEventSender};

/// Period between two clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1,);

/// Owns the background task that publishes one [`ClockMessage::Tick`] per
/// elapsed second.
#[derive(Debug, Default,)]
pub(super) struct Ticker
{
    handle: Option<JoinHandle<(),>,>,
}

impl Ticker
{
    /// Abort the running tick task, if any.
    pub(super) fn abort(&mut self,)
    {
        if let Some(handle,) = self.handle.take() {
            handle.abort();
        }
    }

    pub(super) fn is_active(&self,) -> bool
    {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished(),)
    }

    /// Spawn the tick loop on the context's runtime, replacing any previous
    /// task. The first tick fires one full period after spawning.
    pub(super) fn spawn(&mut self, ctx: &ClockContext, sender: ClockEventSender,)
    {
        self.abort();

        let start = Instant::now() + TICK_INTERVAL;
        let handle = ctx.runtime_handle().spawn(async move {
            let mut ticker = interval_at(start, TICK_INTERVAL,);
            // a tick re-reads the time, so missed ones need no catch-up
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip,);

            loop {
                ticker.tick().await;

                if let Err(err,) = sender.try_send(ClockMessage::Tick,) {
                    warn!("Dropped clock tick: {err}");
                }
            }
        },);

        self.handle = Some(handle,);
    }
}

impl Drop for Ticker
{
    fn drop(&mut self,)
    {
        self.abort();
    }
}

#[cfg(test)]
mod tests
{
    use std::num::NonZeroUsize;

    use tokio::{task::yield_now, time::advance};

    use super::*;
    use crate::event_bus::{BusEvent, EventBus};

    fn clock_context() -> (ClockContext, EventBus,)
    {
        let capacity = NonZeroUsize::new(16,).expect("non-zero capacity",);
        let bus = EventBus::new(capacity,);
        let ctx = ClockContext::new(bus.sender(), tokio::runtime::Handle::current(),);

        (ctx, bus,)
    }

    fn expect_tick(event: Option<BusEvent,>,)
    {
        match event {
            Some(BusEvent::Clock(ClockMessage::Tick,),) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_interval()
    {
        let (ctx, bus,) = clock_context();
        let mut ticker = Ticker::default();
        let mut receiver = bus.receiver();

        ticker.spawn(&ctx, ctx.clock_sender(),);
        yield_now().await;

        assert!(receiver.try_recv().expect("initial queue state").is_none());

        advance(TICK_INTERVAL,).await;
        yield_now().await;

        expect_tick(receiver.try_recv().expect("tick after interval",),);
        assert!(receiver.try_recv().expect("single tick").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn respawn_replaces_previous_task()
    {
        let (ctx, bus,) = clock_context();
        let mut ticker = Ticker::default();
        let mut receiver = bus.receiver();

        ticker.spawn(&ctx, ctx.clock_sender(),);
        yield_now().await;
        ticker.spawn(&ctx, ctx.clock_sender(),);
        yield_now().await;

        advance(TICK_INTERVAL,).await;
        yield_now().await;

        expect_tick(receiver.try_recv().expect("tick after respawn",),);
        assert!(receiver.try_recv().expect("no duplicate tick").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn abort_stops_ticking()
    {
        let (ctx, bus,) = clock_context();
        let mut ticker = Ticker::default();
        let mut receiver = bus.receiver();

        ticker.spawn(&ctx, ctx.clock_sender(),);
        assert!(ticker.is_active());

        ticker.abort();
        assert!(!ticker.is_active());

        advance(TICK_INTERVAL * 3,).await;
        yield_now().await;

        assert!(receiver.try_recv().expect("queue state").is_none());
    }
}
