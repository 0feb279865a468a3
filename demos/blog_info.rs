//! Fetches a blog's info and recent posts.
//!
//! This example shows how to:
//! - Load credentials at the application layer
//! - Call the bundled resource wrappers
//! - Detect API-level errors carried in the envelope
//!
//! Run with: `TUMBLR_CLIENT_ID=... cargo run --example blog_info -- staff.tumblr.com`

use tumblr::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("tumblr=debug,blog_info=info")
        .init();

    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "staff.tumblr.com".to_string());

    let mut client = Client::new()?;
    client.set_client_id(std::env::var("TUMBLR_CLIENT_ID").ok());

    let blog = client.blog(&host);

    match blog.info().await?.error_for_status() {
        Ok(response) => {
            let info = response.into_data()?.blog;
            println!("{} ({})", info.title, info.url);
            println!("Posts: {}", info.posts);
        }
        Err(Error::Api { status, msg, .. }) => {
            println!("API error {}: {}", status, msg);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let posts = blog.posts().await?;
    println!("Fetched in {:?}", posts.latency);
    for post in posts.into_data()?.posts {
        println!("[{}] {}", post.post_type, post.post_url);
    }

    Ok(())
}
