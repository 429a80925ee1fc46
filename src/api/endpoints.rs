// Blog API endpoint functions.
// Typed methods for the three requests the remote collection supports.

use crate::error::Result;

use super::client::BlogClient;
use super::types::BlogPost;

impl BlogClient {
    /// Get the whole collection in one request (no pagination parameters).
    pub async fn fetch_all_posts(&self) -> Result<Vec<BlogPost>> {
        let response = self.get(self.base_url().clone()).await?;
        let posts: Vec<BlogPost> = response.json().await?;
        Ok(posts)
    }

    /// Get one page of posts. Offset math is left to the remote.
    pub async fn fetch_posts_page(&self, page: u32, limit: u32) -> Result<Vec<BlogPost>> {
        let params = [("page", page.to_string()), ("limit", limit.to_string())];
        let response = self
            .get_with_params(self.base_url().clone(), &params)
            .await?;
        let posts: Vec<BlogPost> = response.json().await?;
        Ok(posts)
    }

    /// Get a single post by id.
    pub async fn fetch_post(&self, id: &str) -> Result<BlogPost> {
        let response = self.get(self.post_url(id)).await?;
        let post: BlogPost = response.json().await?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::BlogError;

    fn client_for(server: &MockServer) -> BlogClient {
        BlogClient::new(&format!("{}/posts", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_posts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "title": "One", "createdAt": "2021-01-01T00:00:00Z"},
                {"id": "2", "title": "Two", "createdAt": "2021-01-02T00:00:00Z", "body": "x"},
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client_for(&server).fetch_all_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].extra_field("body"), Some(&json!("x")));
    }

    #[tokio::test]
    async fn test_fetch_posts_page_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(query_param("page", "3"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "11", "title": "Eleven", "createdAt": "2021-01-11T00:00:00Z"},
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let posts = client_for(&server).fetch_posts_page(3, 5).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "11");
    }

    #[tokio::test]
    async fn test_fetch_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": "42", "title": "Answer", "createdAt": "2021-04-02T00:00:00Z"}
            )))
            .mount(&server)
            .await;

        let post = client_for(&server).fetch_post("42").await.unwrap();
        assert_eq!(post.title, "Answer");
    }

    #[tokio::test]
    async fn test_fetch_post_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("\"Not found\""))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_post("missing").await.unwrap_err();
        assert!(matches!(err, BlogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_server_error_and_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/bad"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        match client.fetch_all_posts().await.unwrap_err() {
            BlogError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = client.fetch_post("bad").await.unwrap_err();
        assert!(matches!(err, BlogError::Api(e) if e.is_decode()));
    }
}
