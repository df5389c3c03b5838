//! JSON control scripts.
//!
//! A script is a list of steps, each holding per-slot controls for a number
//! of frames:
//!
//! ```json
//! [
//!   { "repeat": 8, "controls": [{ "direction": "East" }] },
//!   { "repeat": 1, "controls": [{ "direction": "North", "actions": "SHOOT" }] }
//! ]
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use runtime::ScriptStep;

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Failed to parse script {}", path.display()))
}

fn parse_script(content: &str) -> Result<Vec<ScriptStep>> {
    Ok(serde_json::from_str(content)?)
}

/// Total frames the script covers.
pub fn script_frames(steps: &[ScriptStep]) -> u64 {
    steps.iter().map(|step| u64::from(step.repeat)).sum()
}
