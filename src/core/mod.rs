//! # Core Navigation Logic
//!
//! This module contains Prism's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │       (this module)         │
//!                    │                             │
//!                    │  • Command (parsed input)   │
//!                    │  • Navigator (state machine)│
//!                    │  • Catalog (introspection)  │
//!                    │                             │
//!                    │  No terminal. No widgets.   │
//!                    └─────────────┬───────────────┘
//!                                  │
//!                                  ▼
//!                           ┌────────────┐
//!                           │    TUI     │
//!                           │  Adapter   │
//!                           │ (ratatui)  │
//!                           └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`command`]: free text → structured `Command`
//! - [`navigator`]: the modules → types → members drill-down state machine
//! - [`catalog`]: the data model and the [`catalog::Introspect`] provider
//! - [`config`]: settings with defaults → config file → CLI override hierarchy

pub mod catalog;
pub mod command;
pub mod config;
pub mod navigator;
