// blogstore: blog post fetcher and page-sliced read-through cache.

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod store;

pub use api::{BlogClient, BlogPost, PostSource};
pub use config::Config;
pub use error::{BlogError, Result};
pub use fetcher::{ListParams, PostFetcher};
pub use store::{BlogStore, StoreSnapshot};
