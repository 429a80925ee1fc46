// Blog API module.
// Provides the HTTP client, post types, and the source trait used by the store.

pub mod client;
pub mod endpoints;
pub mod source;
pub mod types;

pub use client::BlogClient;
pub use source::PostSource;
pub use types::BlogPost;

/// Public mock collection the blog frontend reads from.
pub const DEFAULT_API_BASE: &str =
    "https://6082e3545dbd2c001757abf5.mockapi.io/qtim-test-work/posts";
