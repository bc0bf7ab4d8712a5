use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary content directory for tests
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file under the content directory, creating parent folders as needed
pub fn create_test_file(content_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Minimal valid post file with the given title and date
pub fn post_source(title: &str, published_date: &str, body: &str) -> String {
    format!("+++\ntitle = \"{title}\"\npublished_date = \"{published_date}\"\n+++\n\n{body}\n")
}
