//! # Core Application Logic
//!
//! This module contains Crave Radar's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • pipeline (ranking)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   places   │      │  location  │
//!     │  Adapter   │      │ (reqwest)  │      │  service   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`pipeline`]: Search query, filter/sort, surprise pick
//! - [`geo`]: Coordinates and haversine distance
//! - [`cuisine`]: Dropdown catalog and icons
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod config;
pub mod cuisine;
pub mod geo;
pub mod pipeline;
pub mod state;
