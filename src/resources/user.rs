//! User resource.

use crate::client::Client;
use crate::models::{DashboardResponse, LikesResponse, UserInfoResponse};
use crate::{Response, Result};

/// Operations on the authenticated user. These need an access token.
pub struct UserResource<'c> {
    client: &'c Client,
}

impl<'c> UserResource<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Get the user's account information.
    pub async fn info(&self) -> Result<Response<UserInfoResponse>> {
        self.client.get("user/info").await
    }

    /// Get the user's dashboard.
    pub async fn dashboard(&self) -> Result<Response<DashboardResponse>> {
        self.client.get("user/dashboard").await
    }

    /// Get the posts the user has liked.
    pub async fn likes(&self) -> Result<Response<LikesResponse>> {
        self.client.get("user/likes").await
    }
}
