//! Single source of truth for user-level file locations.
//!
//! This module defines WHERE data lives. It has no I/O, no validation,
//! no business logic.

use std::path::PathBuf;

/// Per-user idea record file: `~/.fuse_ideas.json`
pub fn ideas_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fuse_ideas.json")
}
