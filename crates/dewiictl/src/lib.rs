//! dewiictl - command line access to the DEWII progression engine.

pub mod commands;
pub mod display;
