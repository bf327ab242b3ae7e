//! Zone profile dump flattener.
//!
//! Reads the XML written by the engine's zone profiler and flattens each
//! frame's event tree into per-level event lists ready for rendering.
//!
//! Dump layout:
//! ```text
//! <root>
//!   <thread id="0" name="Main">
//!     <frame start="..." elapsed="...">
//!       <event start="..." elapsed="..." name="...">
//!         <event .../>
//!         <mutex .../>
//!       </event>
//!     </frame>
//!   </thread>
//! </root>
//! ```

use super::schema::{EventRecord, FrameReport, RenderModel, ThreadReport};
use super::walk::depth_walk_tagged;
use crate::utils::config::{
    EVENT_TAG, EVENT_WRAPPER_LEVELS, FRAME_NOISE_THRESHOLD, FRAME_TAG, PROFILED_THREAD_ID,
    THREAD_TAG,
};
use crate::utils::error::ProfileError;
use log::{debug, info};
use roxmltree::{Document, Node};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Flattening options
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Only the thread with this id is kept
    pub thread_id: i64,
    /// Frames with `elapsed <= noise_threshold` are dropped
    pub noise_threshold: i64,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            thread_id: PROFILED_THREAD_ID,
            noise_threshold: FRAME_NOISE_THRESHOLD,
        }
    }
}

impl FlattenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_id(mut self, thread_id: i64) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn with_noise_threshold(mut self, noise_threshold: i64) -> Self {
        self.noise_threshold = noise_threshold;
        self
    }
}

/// Flatten a profile dump file
///
/// **Public** - main entry point for profile parsing
///
/// # Errors
/// * `ProfileError::NotFound` - `path` is not an existing file
/// * `ProfileError::MalformedInput` - the file cannot be read or parsed
pub fn flatten_profile(
    path: impl AsRef<Path>,
    config: &FlattenConfig,
) -> Result<RenderModel, ProfileError> {
    let path = path.as_ref();

    if !path.is_file() {
        let searched = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        return Err(ProfileError::NotFound(searched));
    }

    debug!("Reading profile dump: {}", path.display());

    let xml = std::fs::read_to_string(path).map_err(|e| {
        ProfileError::MalformedInput(format!("Reading profile dump failed: {}", e))
    })?;

    flatten_str(&xml, config)
}

/// Flatten profile dump markup that is already in memory
///
/// **Public** - used by `flatten_profile` and tests
pub fn flatten_str(xml: &str, config: &FlattenConfig) -> Result<RenderModel, ProfileError> {
    let document = Document::parse(xml)?;
    let mut model = RenderModel::new();

    for thread_node in document
        .root_element()
        .children()
        .filter(|n| n.has_tag_name(THREAD_TAG))
    {
        let thread_id: i64 = parse_attr(thread_node, "id")?;
        if thread_id != config.thread_id {
            debug!("Skipping thread {}", thread_id);
            continue;
        }

        let thread = flatten_thread(thread_node, config)?;
        debug!(
            "Thread {} ({}): {} frames retained",
            thread_id,
            thread.name,
            thread.frames.len()
        );
        model.threads.insert(thread_id, thread);
    }

    info!(
        "Flattened profile: {} threads, {} frames, {} events",
        model.threads.len(),
        model.frame_count(),
        model.event_count()
    );

    Ok(model)
}

/// Collect the retained frames of one thread, in document order
///
/// **Private** - internal helper for flatten_str
fn flatten_thread(thread_node: Node, config: &FlattenConfig) -> Result<ThreadReport, ProfileError> {
    let name = required_attr(thread_node, "name")?.to_string();
    let mut frames = Vec::new();

    for frame_node in thread_node
        .children()
        .filter(|n| n.has_tag_name(FRAME_TAG))
    {
        let start: i64 = parse_attr(frame_node, "start")?;
        let elapsed: i64 = parse_attr(frame_node, "elapsed")?;

        if elapsed <= config.noise_threshold {
            debug!("Dropping frame at {} ({} elapsed)", start, elapsed);
            continue;
        }

        frames.push(flatten_frame(frame_node, start, elapsed)?);
    }

    Ok(ThreadReport { name, frames })
}

/// Flatten one frame's event tree into per-level event lists
///
/// **Private** - internal helper for flatten_thread
fn flatten_frame(frame_node: Node, start: i64, elapsed: i64) -> Result<FrameReport, ProfileError> {
    let mut frame = FrameReport::new(start, elapsed);

    for (event_node, depth) in depth_walk_tagged(frame_node, EVENT_TAG) {
        let level = depth.checked_sub(EVENT_WRAPPER_LEVELS).ok_or_else(|| {
            ProfileError::MalformedInput(format!(
                "<{}> nested at depth {} is shallower than its frame",
                EVENT_TAG, depth
            ))
        })?;

        frame.push_event(
            level,
            EventRecord {
                name: required_attr(event_node, "name")?.to_string(),
                start: parse_attr(event_node, "start")?,
                elapsed: parse_attr(event_node, "elapsed")?,
            },
        );
    }

    Ok(frame)
}

/// Fetch an attribute that must be present
///
/// **Private** - internal utility
fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, ProfileError> {
    node.attribute(name).ok_or_else(|| {
        ProfileError::MalformedInput(format!(
            "<{}> element is missing the '{}' attribute",
            node.tag_name().name(),
            name
        ))
    })
}

/// Fetch and parse a numeric attribute
///
/// **Private** - internal utility
fn parse_attr<T>(node: Node, name: &str) -> Result<T, ProfileError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = required_attr(node, name)?;
    raw.trim().parse().map_err(|e| {
        ProfileError::MalformedInput(format!(
            "<{}> attribute '{}' is not an integer ('{}'): {}",
            node.tag_name().name(),
            name,
            raw,
            e
        ))
    })
}
