// Post source abstraction.
// The seam between the caching store and whatever actually talks to the remote.

use async_trait::async_trait;

use crate::error::Result;

use super::client::BlogClient;
use super::types::BlogPost;

/// Something the store can read posts from.
///
/// [`BlogClient`] is the production implementation; tests plug in fakes.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the entire remote collection.
    async fn fetch_all(&self) -> Result<Vec<BlogPost>>;

    /// Fetch a single post by id.
    async fn fetch_one(&self, id: &str) -> Result<BlogPost>;
}

#[async_trait]
impl PostSource for BlogClient {
    async fn fetch_all(&self) -> Result<Vec<BlogPost>> {
        self.fetch_all_posts().await
    }

    async fn fetch_one(&self, id: &str) -> Result<BlogPost> {
        self.fetch_post(id).await
    }
}
