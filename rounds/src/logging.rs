//! Loggers and logging events for round counting dataflows.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Name under which round events are registered with a worker's log registry.
pub const EVENTS: &str = "rounds/events";

/// Logger for round counting events.
pub type Logger = ::timely::logging::Logger<RoundsEvent>;

/// Enables logging of round counting events, writing one JSON object per line to `writer`.
///
/// Each line is handed to `writer` in a single `write_all`. After a failed write the remaining
/// events of that batch are dropped.
///
/// Returns whatever action was previously registered under [`EVENTS`].
pub fn enable<A, W>(worker: &mut timely::worker::Worker<A>, mut writer: W) -> Option<Box<dyn std::any::Any+'static>>
where
    A: timely::communication::Allocate,
    W: Write+'static,
{
    worker
        .log_register()
        .insert::<RoundsEvent,_>(EVENTS, move |_time, data| {
            for (elapsed, worker, event) in data.drain(..) {
                let record = LoggedEvent { elapsed_ns: elapsed.as_nanos() as u64, worker, event };
                // record and newline go out in one write.
                if let Ok(mut line) = serde_json::to_vec(&record) {
                    line.push(b'\n');
                    if writer.write_all(&line).is_err() {
                        return;
                    }
                }
            }
        })
}

/// Fetches the round event logger registered with `worker`, if any.
pub fn logger<A: timely::communication::Allocate>(worker: &timely::worker::Worker<A>) -> Option<Logger> {
    worker.log_register().get::<RoundsEvent>(EVENTS)
}

/// One event as written by [`enable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Nanoseconds since the worker started.
    pub elapsed_ns: u64,
    /// Index of the worker that logged the event.
    pub worker: usize,
    /// The event itself.
    pub event: RoundsEvent,
}

/// Possible round counting events.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundsEvent {
    /// A permutation was loaded.
    Loaded(LoadedEvent),
    /// Two positions were exchanged.
    Swapped(SwapEvent),
    /// A value started or stopped beginning a round.
    RoundStart(RoundStartEvent),
}

/// A permutation of the given length was loaded.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize)]
pub struct LoadedEvent {
    /// Number of values.
    pub len: usize,
}

impl From<LoadedEvent> for RoundsEvent { fn from(e: LoadedEvent) -> Self { RoundsEvent::Loaded(e) } }

/// The values at two positions were exchanged.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize)]
pub struct SwapEvent {
    /// First position.
    pub left: usize,
    /// Second position.
    pub right: usize,
}

impl From<SwapEvent> for RoundsEvent { fn from(e: SwapEvent) -> Self { RoundsEvent::Swapped(e) } }

/// A change in the set of values that begin rounds.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundStartEvent {
    /// The value.
    pub value: usize,
    /// Positive when the value now begins a round, negative when it no longer does.
    pub diff: isize,
}

impl From<RoundStartEvent> for RoundsEvent { fn from(e: RoundStartEvent) -> Self { RoundsEvent::RoundStart(e) } }
