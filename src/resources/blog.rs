//! Blog resource.

use crate::client::{encode_form, Client};
use crate::models::{BlogInfoResponse, CreatedPost, PostsResponse};
use crate::{Error, Response, Result};

/// Operations on a single blog.
pub struct BlogResource<'c> {
    client: &'c Client,
    host: String,
}

impl<'c> BlogResource<'c> {
    pub(crate) fn new(client: &'c Client, host: String) -> Self {
        Self { client, host }
    }

    /// The blog identifier this resource targets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get general information about the blog.
    pub async fn info(&self) -> Result<Response<BlogInfoResponse>> {
        self.client.get(&self.endpoint("info")?).await
    }

    /// Get the most recent posts of the blog.
    pub async fn posts(&self) -> Result<Response<PostsResponse>> {
        self.client.get(&self.endpoint("posts")?).await
    }

    /// Publish a text post.
    pub async fn create_text_post(&self, title: &str, body: &str) -> Result<Response<CreatedPost>> {
        let form = encode_form([("type", "text"), ("title", title), ("body", body)]);
        self.client.post_form(&self.endpoint("post")?, &form).await
    }

    /// `blog/{host}/{name}`, with `host` confined to one path segment so it
    /// cannot redirect the request (and its credentials) elsewhere.
    fn endpoint(&self, name: &str) -> Result<String> {
        let host = self.host.as_str();
        let is_segment = !host.is_empty()
            && host != "."
            && host != ".."
            && !host.contains(|c: char| {
                matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_control()
            });
        if !is_segment {
            return Err(Error::InvalidBlogIdentifier(self.host.clone()));
        }
        Ok(format!("blog/{}/{}", host, name))
    }
}
