//! Structured logging for the store and the driver.
//!
//! Spans and events are emitted with `tracing` throughout the crate (one
//! `handle_event` span per reducer step, one `store_dispatch` span per publish).
//! This module installs the subscriber that prints them.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

mod init;

pub use init::init_tracing;
