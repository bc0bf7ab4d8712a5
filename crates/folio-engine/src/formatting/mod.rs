//! # Content Formatting
//!
//! Turns a loosely-structured post body into an ordered list of typed
//! [`Block`]s for a renderer.
//!
//! ## Modes
//!
//! - **Flat** (`format_flat`): the content is split into blank-line segments
//!   and every segment is classified into exactly one block by its leading
//!   token (`##`, `###`, `*`, `1.`, fences, `>`), falling back to a paragraph.
//! - **Sectioned** (`sections`): "Chapter" words and `##` lines split the
//!   content into an introduction and numbered sections whose bodies are only
//!   split into subheadings and paragraphs.
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block-specific types owning their delimiters
//! - **`segments`**: blank-line segmentation with fenced raw zones
//! - **`classify`**: `SegmentClassifier` for flat mode
//! - **`sections`**: boundary detection, introduction and section bodies
//!
//! ## Key Invariants
//!
//! - Formatting is a pure function of `(content, mode)`; it never fails
//! - Block order mirrors document order
//! - Empty segments are dropped, no non-empty segment is

pub mod classify;
pub mod kinds;
pub mod sections;
pub mod segments;
pub mod types;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub use classify::SegmentClassifier;
pub use segments::Segments;
pub use types::Block;

/// How a post body is turned into blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Flat,
    Sectioned,
}

impl RenderMode {
    pub const ALL: [RenderMode; 2] = [RenderMode::Flat, RenderMode::Sectioned];

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Flat => "flat",
            RenderMode::Sectioned => "sectioned",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown render mode '{0}', expected 'flat' or 'sectioned'")]
pub struct ParseModeError(pub String);

impl FromStr for RenderMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(RenderMode::Flat),
            "sectioned" => Ok(RenderMode::Sectioned),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Formats `content` into blocks using `mode`.
pub fn format(content: &str, mode: RenderMode) -> Vec<Block> {
    match mode {
        RenderMode::Flat => format_flat(content).collect(),
        RenderMode::Sectioned => sections::format_sectioned(content),
    }
}

/// Lazily formats `content` in flat mode, one block per segment.
pub fn format_flat(content: &str) -> impl Iterator<Item = Block> + '_ {
    let classifier = SegmentClassifier;
    Segments::fenced(content).map(move |segment| classifier.classify(&segment))
}

#[cfg(test)]
mod tests;
