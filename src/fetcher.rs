// Stateless post fetcher.
// Thin wrappers over the client that log failures and hand them back unchanged.

use tracing::error;

use crate::api::{BlogClient, BlogPost};
use crate::error::Result;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination parameters passed straight through to the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Issues list and by-id requests with no caching.
#[derive(Debug, Clone)]
pub struct PostFetcher {
    client: BlogClient,
}

impl PostFetcher {
    pub fn new(client: BlogClient) -> Self {
        Self { client }
    }

    /// Fetch one remote page of posts.
    pub async fn fetch_posts(&self, params: ListParams) -> Result<Vec<BlogPost>> {
        self.client
            .fetch_posts_page(params.page, params.limit)
            .await
            .inspect_err(|e| {
                error!(page = params.page, limit = params.limit, error = %e, "Error fetching posts")
            })
    }

    /// Fetch a single post.
    pub async fn fetch_post_by_id(&self, id: &str) -> Result<BlogPost> {
        self.client
            .fetch_post(id)
            .await
            .inspect_err(|e| error!(id, error = %e, "Error fetching post"))
    }
}
