//! Tagged posts resource.

use crate::client::{encode_form, Client};
use crate::models::Post;
use crate::{Response, Result};

/// Search across all blogs by tag.
pub struct TaggedResource<'c> {
    client: &'c Client,
}

impl<'c> TaggedResource<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Get recent posts carrying `tag`.
    pub async fn posts(&self, tag: &str) -> Result<Response<Vec<Post>>> {
        let query = encode_form([("tag", tag)]);
        self.client.get(&format!("tagged?{}", query)).await
    }
}
