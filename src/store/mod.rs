// Store module.
// Session-scoped caching layer between the UI and the blog API.

pub mod blog;
pub mod state;

pub use blog::{BlogStore, POST_ERROR_MESSAGE, POSTS_ERROR_MESSAGE};
pub use state::{BlogState, PER_PAGE, StoreSnapshot, total_pages};
