//! Render model produced by flattening a zone profile dump.
//!
//! Ordered maps keep iteration and serialization deterministic, so the same
//! dump always produces the same model and the same JSON bytes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Events of one frame, grouped by normalized nesting level
pub type EventLevels = BTreeMap<usize, Vec<EventRecord>>;

/// Top-level model handed to the report template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderModel {
    /// Retained threads keyed by thread id
    pub threads: BTreeMap<i64, ThreadReport>,
}

impl RenderModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of retained frames across all threads
    pub fn frame_count(&self) -> usize {
        self.threads.values().map(|t| t.frames.len()).sum()
    }

    /// Total number of events across all retained frames
    pub fn event_count(&self) -> usize {
        self.threads
            .values()
            .flat_map(|t| &t.frames)
            .map(FrameReport::event_count)
            .sum()
    }
}

/// A profiled thread and its retained frames, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadReport {
    pub name: String,
    pub frames: Vec<FrameReport>,
}

/// One captured frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub start: i64,
    pub elapsed: i64,
    pub events: EventLevels,
}

impl FrameReport {
    pub fn new(start: i64, elapsed: i64) -> Self {
        Self {
            start,
            elapsed,
            events: EventLevels::new(),
        }
    }

    /// Append an event to its level, creating the level on first use
    pub fn push_event(&mut self, level: usize, event: EventRecord) {
        self.events.entry(level).or_default().push(event);
    }

    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

/// A named timing span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub start: i64,
    pub elapsed: i64,
}

impl EventRecord {
    pub fn new(name: impl Into<String>, start: i64, elapsed: i64) -> Self {
        Self {
            name: name.into(),
            start,
            elapsed,
        }
    }
}
