//! CLI library components for the typed CSV decoder.

pub mod cli;
pub mod commands;
pub mod logging;
