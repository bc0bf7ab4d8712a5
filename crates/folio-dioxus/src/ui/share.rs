//! Social share links for a post URL.

use urlencoding::encode;

pub fn twitter_url(url: &str, title: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?url={}&text={}",
        encode(url),
        encode(title)
    )
}

pub fn linkedin_url(url: &str) -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}",
        encode(url)
    )
}
