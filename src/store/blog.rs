// Blog store.
// Read-through cache over a post source: whole collection fetched once, pages sliced locally.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::{BlogPost, PostSource};
use crate::error::{BlogError, Result};

use super::state::{BlogState, PER_PAGE, StoreSnapshot, page_slice};

/// Message recorded in `posts_error` when the list fetch fails.
pub const POSTS_ERROR_MESSAGE: &str = "Ошибка при загрузке статей";
/// Message recorded in `post_error` when a single-post fetch fails.
pub const POST_ERROR_MESSAGE: &str = "Ошибка при загрузке статьи";

/// Raises a loading flag for its lifetime.
///
/// The flag drops back to `false` however the fetch ends, including when the
/// caller abandons the future mid-request.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Session-scoped blog state with read-through caching.
///
/// One instance is built per session by whoever wires the application
/// together. Methods take `&self`; the state lock is never held across a
/// network call, so overlapping calls interleave at the fetch and can
/// observe each other's loading flags. Concurrent misses are not
/// de-duplicated: each one fetches and the last to finish wins.
pub struct BlogStore<S> {
    source: S,
    state: RwLock<BlogState>,
    loading_posts: AtomicBool,
    loading_post: AtomicBool,
}

impl<S: PostSource> BlogStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(BlogState::default()),
            loading_posts: AtomicBool::new(false),
            loading_post: AtomicBool::new(false),
        }
    }

    /// The source this store reads from.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub const fn per_page(&self) -> usize {
        PER_PAGE
    }

    /// Get one page of posts (1-indexed).
    ///
    /// Served from the page cache, then from the cached collection, and only
    /// when neither is available by fetching the whole collection once.
    /// Any successful list fetch ends network list fetching for this store,
    /// including one that returned an empty collection.
    pub async fn fetch_posts(&self, page: u32) -> Result<Vec<BlogPost>> {
        if page == 0 {
            return Err(BlogError::InvalidPage(page));
        }

        let loading = {
            let mut state = self.state.write().await;

            if let Some(cached) = state.posts_by_page.get(&page) {
                debug!(page, "page cache hit");
                return Ok(cached.clone());
            }

            if state.all_posts_loaded {
                debug!(page, "slicing page from cached collection");
                let slice = page_slice(&state.all_posts, page, PER_PAGE);
                state.posts_by_page.insert(page, slice.clone());
                return Ok(slice);
            }

            state.posts_error = None;
            LoadingGuard::raise(&self.loading_posts)
        };

        debug!(page, "fetching full collection");
        let result = self.source.fetch_all().await;
        drop(loading);

        let mut state = self.state.write().await;

        match result {
            Ok(posts) => {
                state.total_count = posts.len();
                state.all_posts = posts;
                state.all_posts_loaded = true;

                let slice = page_slice(&state.all_posts, page, PER_PAGE);
                state.posts_by_page.insert(page, slice.clone());
                Ok(slice)
            }
            Err(e) => {
                warn!(page, error = %e, "post list fetch failed");
                state.posts_error = Some(POSTS_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Get a single post, fetching it only if it has not been seen before.
    ///
    /// Returns `Ok(None)` for an empty id without touching any state.
    pub async fn fetch_post_by_id(&self, id: &str) -> Result<Option<BlogPost>> {
        if id.is_empty() {
            return Ok(None);
        }

        let loading = {
            let mut state = self.state.write().await;

            if let Some(post) = state.post_details.get(id).cloned() {
                debug!(id, "post cache hit");
                state.post_error = None;
                return Ok(Some(post));
            }

            state.post_error = None;
            LoadingGuard::raise(&self.loading_post)
        };

        debug!(id, "fetching post");
        let result = self.source.fetch_one(id).await;
        drop(loading);

        let mut state = self.state.write().await;

        match result {
            Ok(post) => {
                state.post_details.insert(id.to_string(), post.clone());
                Ok(Some(post))
            }
            Err(e) => {
                warn!(id, error = %e, "post fetch failed");
                state.post_error = Some(POST_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    pub async fn clear_posts_error(&self) {
        self.state.write().await.posts_error = None;
    }

    pub async fn clear_post_error(&self) {
        self.state.write().await.post_error = None;
    }

    /// Pages needed to show the whole collection; 0 before anything is loaded.
    pub async fn total_pages(&self) -> usize {
        self.state.read().await.total_pages()
    }

    pub async fn total_count(&self) -> usize {
        self.state.read().await.total_count
    }

    pub async fn all_posts(&self) -> Vec<BlogPost> {
        self.state.read().await.all_posts.clone()
    }

    /// Cached page, if it has been computed.
    pub async fn cached_page(&self, page: u32) -> Option<Vec<BlogPost>> {
        self.state.read().await.posts_by_page.get(&page).cloned()
    }

    /// Cached post details, if fetched.
    pub async fn cached_post(&self, id: &str) -> Option<BlogPost> {
        self.state.read().await.post_details.get(id).cloned()
    }

    pub async fn post_details(&self) -> HashMap<String, BlogPost> {
        self.state.read().await.post_details.clone()
    }

    pub fn is_loading_posts(&self) -> bool {
        self.loading_posts.load(Ordering::SeqCst)
    }

    pub fn is_loading_post(&self) -> bool {
        self.loading_post.load(Ordering::SeqCst)
    }

    pub async fn posts_error(&self) -> Option<String> {
        self.state.read().await.posts_error.clone()
    }

    pub async fn post_error(&self) -> Option<String> {
        self.state.read().await.post_error.clone()
    }

    /// Consistent copy of the whole state.
    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await.clone();
        StoreSnapshot::new(state, self.is_loading_posts(), self.is_loading_post())
    }
}
