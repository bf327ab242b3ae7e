//! Profile dump parsing and the render model.
//!
//! This module handles:
//! - Walking XML element trees with depth tracking
//! - Flattening zone profiler dumps into per-level events
//! - Defining the model handed to the report renderer

pub mod profile_dump;
pub mod schema;
pub mod walk;

// Re-export main types
pub use profile_dump::{flatten_profile, flatten_str, FlattenConfig};
pub use schema::{EventLevels, EventRecord, FrameReport, RenderModel, ThreadReport};
pub use walk::{depth_walk, depth_walk_tagged, DepthWalk};
