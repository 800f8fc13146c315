//! Utility functions for the OrgView GUI.

mod memory;

pub use memory::{format_memory_mb, get_current_memory_mb};
