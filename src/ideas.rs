//! Persistent scratchpad of project ideas.
//!
//! An append-only list of free-text notes at `~/.fuse_ideas.json`, read
//! fully and rewritten wholesale on each save. Not part of the scaffolding
//! flow; exposed through the library for embedders and future commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::paths;

/// Load the record of previous ideas if it exists.
pub fn load_previous_ideas() -> Vec<String> {
    load_from(&paths::ideas_file())
}

/// Append an idea to persistent storage.
pub fn save_idea(idea: &str) -> Result<()> {
    save_to(&paths::ideas_file(), idea)
}

fn load_from(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(ideas) => ideas,
            Err(_) => {
                warn!("Failed to parse ideas file, starting fresh");
                Vec::new()
            }
        },
        Err(err) => {
            warn!("Failed to read ideas file, starting fresh: {err}");
            Vec::new()
        }
    }
}

fn save_to(path: &Path, idea: &str) -> Result<()> {
    let mut ideas = load_from(path);
    ideas.push(idea.to_string());

    let json = serde_json::to_string_pretty(&ideas)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
