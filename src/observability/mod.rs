//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable via config file and `RUST_LOG`
//! - All operational detail goes to the log; stdout is reserved for the
//!   single success report line

pub mod logging;
