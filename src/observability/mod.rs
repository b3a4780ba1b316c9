//! Observability for son
//!
//! Structured JSON logging of typed events. Logging is synchronous, has no
//! side effects on container operations, and never fails the caller.
//!
//! ```ignore
//! use son::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ContainerOpen, &[("path", "data.son")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Log an event with fields, bypassing the severity filter when `force` is set
pub fn log_event_forced(event: Event, fields: &[(&str, &str)], force: bool) {
    if force {
        Logger::write(event.severity(), event.as_str(), fields);
    } else {
        log_event_with_fields(event, fields);
    }
}

/// Lowers the minimum severity to INFO when `verbose` is set.
pub fn set_verbose(verbose: bool) {
    if verbose {
        Logger::set_min_severity(Severity::Info);
    }
}
