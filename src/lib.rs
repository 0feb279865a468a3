//! # tumblr - A minimal client for the Tumblr v2 API
//!
//! Builds authenticated requests against `http://api.tumblr.com/v2/`, sends
//! them with `reqwest`, and decodes the JSON envelope every endpoint returns
//! into a caller-chosen payload type.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tumblr::Client;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Info {
//!     blog: BlogTitle,
//! }
//!
//! #[derive(Deserialize)]
//! struct BlogTitle {
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tumblr::Error> {
//!     let client = Client::builder().client_id("my-consumer-key").build()?;
//!
//!     // Paths are relative to the API base and have no leading slash.
//!     let response = client.get::<Info>("blog/staff.tumblr.com/info").await?;
//!     println!("{} {}", response.meta.status, response.meta.msg);
//!
//!     let info = response.error_for_status()?.into_data()?;
//!     println!("Title: {}", info.blog.title);
//!
//!     // Or through the bundled resource wrappers.
//!     let posts = client.blog("staff.tumblr.com").posts().await?;
//!     println!("Fetched posts in {:?}", posts.latency);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Request building
//!
//! [`Client::new_request`] resolves the path against the base URL, then adds
//! `access_token`, `client_id` and `client_secret` for whichever credentials
//! are configured. A parameter already on the path is never overwritten. POST
//! requests carry `Content-Type: application/x-www-form-urlencoded`, and every
//! request carries the client's `User-Agent`.
//!
//! ## Envelope decoding
//!
//! Every response body looks like
//! `{"meta": {"status": 200, "msg": "OK"}, "response": ...}`.
//! [`Client::send`] decodes it into a [`Response<T>`] whatever the HTTP status,
//! so API errors such as a 404 arrive as `Ok` with `meta.status == 404`. Call
//! [`Response::error_for_status`] to turn those into [`Error::Api`].
//!
//! ## Logging
//!
//! Requests and responses are traced with `tracing` at `debug` level, and
//! decode failures at `error` level. Query strings are stripped from logged
//! URLs so credentials stay out of logs.

mod client;
mod envelope;
mod error;
pub mod models;
pub mod resources;
mod response;

pub use client::{encode_form, Client, ClientBuilder};
pub use envelope::{Envelope, Meta};
pub use error::{Error, Result};
pub use response::Response;

/// Version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the Tumblr API.
pub const BASE_URL: &str = "http://api.tumblr.com/v2/";

/// Default `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("github.com/lestopher/tumblr v", env!("CARGO_PKG_VERSION"));
