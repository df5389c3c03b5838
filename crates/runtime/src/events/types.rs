//! Event types for different topics.

use serde::{Deserialize, Serialize};

/// Session lifecycle events (lightweight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The first level was loaded and characters placed.
    Started { level: u32 },
    /// The frame loop ended after `frames` steps.
    Stopped { frames: u64 },
    /// Every character is dead; the session cannot progress.
    AllDead { level: u32 },
}
