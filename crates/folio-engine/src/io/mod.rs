use crate::content::{ContentError, PortfolioItem, Post, PostCollection, parse_portfolio};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Folder under the content root holding one markdown file per post.
pub const POSTS_DIR: &str = "posts";
/// Portfolio listing under the content root.
pub const PORTFOLIO_FILE: &str = "portfolio.toml";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Read a content file and return its text
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Post files directly under `posts/`, sorted by path.
///
/// Returns an empty list when the content root has no `posts/` folder.
pub fn scan_post_files(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let posts_dir = content_root.join(POSTS_DIR);
    if !posts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&posts_dir)? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "md"
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            files.push(RelativePath::new(POSTS_DIR).join(name));
        }
    }
    files.sort();
    Ok(files)
}

/// Loads every post under the content root.
///
/// A post that fails to read or parse is logged and skipped so one broken
/// file does not take the whole site down.
pub fn load_collection(content_root: &Path) -> Result<PostCollection, IoError> {
    let files = scan_post_files(content_root)?;
    let mut posts = Vec::with_capacity(files.len());

    for file in &files {
        let Some(slug) = file.file_stem() else {
            continue;
        };
        let loaded = read_file(file, content_root)
            .and_then(|text| Post::parse(slug, &text).map_err(IoError::from));
        match loaded {
            Ok(post) => posts.push(post),
            Err(e) => log::warn!("Skipping post {file}: {e}"),
        }
    }

    let collection = PostCollection::new(posts);
    log::info!(
        "Loaded {} posts from {}",
        collection.len(),
        content_root.display()
    );
    Ok(collection)
}

/// Loads `portfolio.toml`; a missing file means an empty portfolio.
pub fn load_portfolio(content_root: &Path) -> Result<Vec<PortfolioItem>, IoError> {
    let path = RelativePath::new(PORTFOLIO_FILE);
    match read_file(path, content_root) {
        Ok(text) => Ok(parse_portfolio(&text)?),
        Err(IoError::NotFound(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}
