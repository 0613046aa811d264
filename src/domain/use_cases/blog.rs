use std::collections::BTreeSet;

use chrono::Utc;
use validator::Validate;

use crate::{
    constants::{ALL_TAG, BLOG_POSTS_KEY, BLOG_POST_ID_PREFIX},
    entities::blog_post::{BlogPost, BlogPostRequest},
    errors::AppError,
    repositories::{collection::CollectionStore, storage::KeyValueStorage},
    seeds,
    utils::ids::create_id,
};

pub struct BlogPostHandler<S>
where
    S: KeyValueStorage,
{
    store: CollectionStore<S>,
}

impl<S> BlogPostHandler<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: CollectionStore<S>) -> Self {
        BlogPostHandler { store }
    }

    /// Retrieves the full post collection in stored order.
    pub fn list(&self) -> Vec<BlogPost> {
        self.store.load(BLOG_POSTS_KEY, &seeds::seed_blog_posts())
    }

    /// Computes the visible post list for the current filter inputs.
    pub fn filtered(&self, query: &str, tag: &str) -> Vec<BlogPost> {
        filter_posts(&self.list(), query, tag)
    }

    /// Enumerates the selectable tags for the current collection.
    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.list())
    }

    /// Creates a new blog post dated today and prepends it
    pub fn create(&self, request: BlogPostRequest) -> Result<BlogPost, AppError> {
        request.validate()?;

        let post = BlogPost {
            id: create_id(BLOG_POST_ID_PREFIX),
            title: request.title,
            date: Utc::now().date_naive(),
            tags: request.tags,
            excerpt: request.excerpt,
            content: request.content,
        };

        self.store.mutate(BLOG_POSTS_KEY, &seeds::seed_blog_posts(), |posts| {
            posts.insert(0, post.clone());
        });

        Ok(post)
    }

    /// Replaces the editable fields of an existing post. Identity and
    /// creation date are preserved.
    pub fn update(&self, id: &str, request: BlogPostRequest) -> Result<BlogPost, AppError> {
        request.validate()?;

        let mut updated = None;
        self.store.mutate(BLOG_POSTS_KEY, &seeds::seed_blog_posts(), |posts| {
            if let Some(existing) = posts.iter_mut().find(|p| p.id == id) {
                existing.title = request.title;
                existing.tags = request.tags;
                existing.excerpt = request.excerpt;
                existing.content = request.content;
                updated = Some(existing.clone());
            }
        });

        updated.ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }

    /// Deletes a blog post by its ID
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut removed = false;
        self.store.mutate(BLOG_POSTS_KEY, &seeds::seed_blog_posts(), |posts| {
            let before = posts.len();
            posts.retain(|p| p.id != id);
            removed = posts.len() != before;
        });

        if removed {
            Ok(())
        } else {
            Err(AppError::NotFound("Blog post not found".to_string()))
        }
    }
}

// ───── View Derivation ──────────────────────────────────────────────

/// Collects every distinct tag across `posts`, sorted by code point,
/// with the synthetic "all" entry prepended. Recomputed fresh on every
/// call; never cached.
pub fn available_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut distinct = BTreeSet::new();
    for post in posts {
        for tag in &post.tags {
            distinct.insert(tag.clone());
        }
    }

    let mut tags = Vec::with_capacity(distinct.len() + 1);
    tags.push(ALL_TAG.to_string());
    tags.extend(distinct);
    tags
}

/// Computes the filtered, date-descending post list.
///
/// Tag matching is exact and case-sensitive while the query match is
/// case-insensitive; the asymmetry is intentional and load-bearing for
/// the existing UI. The stable sort keeps equal-date posts in their
/// stored relative order.
pub fn filter_posts(posts: &[BlogPost], query: &str, tag: &str) -> Vec<BlogPost> {
    let query = query.trim().to_lowercase();

    let mut filtered: Vec<BlogPost> = posts
        .iter()
        .filter(|post| tag == ALL_TAG || post.tags.iter().any(|t| t == tag))
        .filter(|post| {
            if query.is_empty() {
                return true;
            }
            post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query)
                || post.content.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}
