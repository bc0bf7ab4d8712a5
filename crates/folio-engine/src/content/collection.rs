use std::collections::HashSet;

use super::post::Post;

/// All published posts, newest first.
///
/// Ties on the publish date are broken by slug so the order is stable
/// regardless of the order files were read in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    /// Builds a collection, keeping only the first post seen for each slug.
    pub fn new(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut seen = HashSet::new();
        let mut posts: Vec<Post> = posts
            .into_iter()
            .filter(|post| {
                let fresh = seen.insert(post.slug.clone());
                if !fresh {
                    log::warn!("Skipping duplicate post slug '{}'", post.slug);
                }
                fresh
            })
            .collect();

        posts.sort_by(|a, b| {
            b.published_date
                .cmp(&a.published_date)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        Self { posts }
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Every slug in display order; one static page is generated per slug.
    pub fn slugs(&self) -> Vec<&str> {
        self.posts.iter().map(|post| post.slug.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
