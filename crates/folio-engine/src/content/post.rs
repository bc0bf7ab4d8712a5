use serde::{Deserialize, Serialize};

use crate::formatting::{Block, RenderMode, format};

/// Delimiter line that opens and closes a post's TOML front matter.
pub const FRONT_MATTER_DELIMITER: &str = "+++";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Post '{slug}' has no front matter block delimited by '+++'")]
    MissingFrontMatter { slug: String },

    #[error("Failed to parse front matter of post '{slug}': {source}")]
    InvalidFrontMatter {
        slug: String,
        source: toml::de::Error,
    },

    #[error("Failed to parse portfolio: {0}")]
    InvalidPortfolio(#[from] toml::de::Error),
}

/// An audio narration attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub src: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    description: String,
    published_date: String,
    #[serde(default)]
    read_time: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    render_mode: Option<RenderMode>,
    #[serde(default)]
    audio: Option<AudioTrack>,
}

/// A blog post: front matter metadata plus the raw body handed to the formatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// ISO `YYYY-MM-DD`; sorts lexicographically.
    pub published_date: String,
    pub read_time: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image: String,
    /// Mode requested by the post itself, overriding the site default.
    pub render_mode: Option<RenderMode>,
    pub audio: Option<AudioTrack>,
    pub body: String,
}

impl Post {
    /// Parses a post file: a `+++` delimited TOML front matter block followed by the body.
    pub fn parse(slug: &str, text: &str) -> Result<Self, ContentError> {
        let (front, body) =
            split_front_matter(text).ok_or_else(|| ContentError::MissingFrontMatter {
                slug: slug.to_string(),
            })?;

        let meta: FrontMatter =
            toml::from_str(front).map_err(|source| ContentError::InvalidFrontMatter {
                slug: slug.to_string(),
                source,
            })?;

        Ok(Self {
            slug: slug.to_string(),
            title: meta.title,
            description: meta.description,
            published_date: meta.published_date,
            read_time: meta.read_time,
            author: meta.author,
            tags: meta.tags,
            image: meta.image,
            render_mode: meta.render_mode,
            audio: meta.audio,
            body: body.trim().to_string(),
        })
    }

    /// The mode this post is formatted with when the site default is `default`.
    pub fn effective_mode(&self, default: RenderMode) -> RenderMode {
        self.render_mode.unwrap_or(default)
    }

    /// Formats the body with the post's own mode, or `default` when it has none.
    pub fn blocks(&self, default: RenderMode) -> Vec<Block> {
        format(&self.body, self.effective_mode(default))
    }

    /// Public URL of the post page, used by share links.
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}/blog/{}", base_url.trim_end_matches('/'), self.slug)
    }
}

/// Splits `text` into (front matter, body), or `None` when there is no complete block.
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start_matches('\u{feff}');
    let rest = text.strip_prefix(FRONT_MATTER_DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0usize;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
