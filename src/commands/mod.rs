//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `run.rs` — check/manifest command handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate checking logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod run;

pub use run::{handle_check, handle_manifest};
