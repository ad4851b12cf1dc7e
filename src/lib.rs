//! Aniforge - anime release discovery automation
//!
//! This library crate exposes the daemon's components for integration
//! testing: the watch-list, search and download clients plus the
//! discovery engine that ties them together.

pub mod animelist;
pub mod config;
pub mod discovery;
pub mod downloads;
pub mod search;
