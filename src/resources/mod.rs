//! Per-resource wrappers over [`Client`](crate::Client).
//!
//! Each resource only builds a path and hands it to the client.

mod blog;
mod tagged;
mod user;

pub use blog::BlogResource;
pub use tagged::TaggedResource;
pub use user::UserResource;
