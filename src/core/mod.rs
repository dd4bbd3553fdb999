//! # Core Quiz Logic
//!
//! This module contains the quiz itself.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Bank (questions)     │
//!                    │  • Session (state)      │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`bank`]: `Question` records and the built-in question list
//! - [`state`]: The `Session` struct and its read-only queries
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings for the adapter and logging (the only module here that touches disk)

pub mod action;
pub mod bank;
pub mod config;
pub mod state;

pub use action::{Action, update};
pub use state::Session;
