//! Debstage library exports for testing.
//!
//! This module exposes internal components for integration testing.

pub mod clean;
pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod layout;
pub mod preflight;
pub mod process;
pub mod stager;
