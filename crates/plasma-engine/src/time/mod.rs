//! Time subsystem.
//!
//! Timer utilities that work on caller-supplied `Instant`s so they can be
//! driven by the event loop and tested without sleeping.
//! Intended usage:
//! - one `Debouncer` per window for resize notifications
//! - `schedule()` on every notification, `poll()` when the loop wakes up

mod debounce;

pub use debounce::{Debouncer, ScheduledTask, DEFAULT_RESIZE_DEBOUNCE};
