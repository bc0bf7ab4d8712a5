pub mod content;
pub mod formatting;
pub mod io;
pub mod player;
pub mod reading;
pub mod theme;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::{ContentError, PortfolioItem, Post, PostCollection};
pub use formatting::{Block, ParseModeError, RenderMode, format};
pub use io::*;
pub use player::{PlaybackRate, PlayerState, format_time};
pub use reading::reading_progress;
pub use theme::{BackgroundKind, CardVariant, ParseThemeError, StyleTokens, Theme};
