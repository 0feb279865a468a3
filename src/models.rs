//! Payload shapes for the bundled resource services.
//!
//! Only the commonly used fields are modelled; anything else in the payload is
//! ignored. Use `serde_json::Value` with [`Client::get`](crate::Client::get)
//! for the full document.

use serde::{Deserialize, Serialize};

/// A blog, as returned by `blog/{host}/info` and embedded in other payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub name: String,
    pub title: String,
    pub url: String,
    pub description: String,
    /// Number of posts on the blog.
    pub posts: u64,
    /// Unix timestamp of the last update.
    pub updated: u64,
    pub ask: bool,
    /// Only present when the blog shares its likes.
    pub likes: Option<u64>,
}

/// A post. Fields not shared by every post type are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub blog_name: String,
    pub post_url: String,
    /// `text`, `photo`, `quote`, `link`, `chat`, `audio`, `video` or `answer`.
    #[serde(rename = "type")]
    pub post_type: String,
    pub timestamp: u64,
    pub date: String,
    pub tags: Vec<String>,
    pub note_count: u64,
    pub summary: String,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Payload of `blog/{host}/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogInfoResponse {
    pub blog: Blog,
}

/// Payload of `blog/{host}/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub blog: Blog,
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total_posts: u64,
}

/// Payload of `blog/{host}/post`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPost {
    pub id: u64,
}

/// The authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub likes: u64,
    pub following: u64,
    pub default_post_format: String,
    pub blogs: Vec<Blog>,
}

/// Payload of `user/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub user: User,
}

/// Payload of `user/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub posts: Vec<Post>,
}

/// Payload of `user/likes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikesResponse {
    pub liked_posts: Vec<Post>,
    #[serde(default)]
    pub liked_count: u64,
}
