#![forbid(unsafe_code)]

//! Core: event and ticket records, literal calendar dates, the clock seam,
//! and engine configuration.

pub mod clock;
pub mod config;
pub mod date;
pub mod event;
pub mod logging;
pub mod ticket;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ENV_PREVIEW_MONTH, EngineConfig};
pub use date::{CalendarDate, DateParseError, Month};
pub use event::{EventAttributes, EventEntry, EventSource, ReentryPolicy};
pub use ticket::TicketState;

// With `tracing` on, the macros sit at the crate root just like the
// `#[macro_export]` stand-ins do when it is off.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
