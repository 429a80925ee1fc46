// Blog store state.
// Cached posts, page slices, and per-operation loading/error flags.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::api::BlogPost;

/// Fixed page size for store-served pages.
pub const PER_PAGE: usize = 8;

/// Everything the store remembers for one session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogState {
    /// Full collection, filled by the first successful list fetch.
    pub all_posts: Vec<BlogPost>,
    /// Set once a list fetch has succeeded, even if it returned nothing.
    #[serde(skip)]
    pub all_posts_loaded: bool,
    /// Page number to its slice of `all_posts`.
    pub posts_by_page: BTreeMap<u32, Vec<BlogPost>>,
    /// Post id to the individually fetched post.
    pub post_details: HashMap<String, BlogPost>,
    pub total_count: usize,
    pub posts_error: Option<String>,
    pub post_error: Option<String>,
}

impl BlogState {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, PER_PAGE)
    }
}

/// Read-only copy of the store state handed to the UI layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(flatten)]
    pub state: BlogState,
    pub is_loading_posts: bool,
    pub is_loading_post: bool,
    pub total_pages: usize,
    pub per_page: usize,
}

impl StoreSnapshot {
    pub fn new(state: BlogState, is_loading_posts: bool, is_loading_post: bool) -> Self {
        let total_pages = state.total_pages();
        Self {
            state,
            is_loading_posts,
            is_loading_post,
            total_pages,
            per_page: PER_PAGE,
        }
    }
}

/// Number of pages needed for `total_count` items.
pub fn total_pages(total_count: usize, per_page: usize) -> usize {
    if total_count == 0 || per_page == 0 {
        return 0;
    }
    total_count.div_ceil(per_page)
}

/// The `[(page-1)*per_page, page*per_page)` window of `posts`, clamped to its length.
/// `page` must be at least 1.
pub fn page_slice(posts: &[BlogPost], page: u32, per_page: usize) -> Vec<BlogPost> {
    let start = (page.saturating_sub(1) as usize)
        .saturating_mul(per_page)
        .min(posts.len());
    let end = start.saturating_add(per_page).min(posts.len());
    posts[start..end].to_vec()
}
