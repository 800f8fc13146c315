//! Input handling for interactive panels.

pub mod org_input_handler;
