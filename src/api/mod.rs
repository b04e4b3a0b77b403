//! Inventory backend access
//!
//! The backend exposes a single unauthenticated endpoint, `GET /api/list`,
//! returning the full resource collection as a JSON array.
//!
//! - [`client`] - reqwest-based client returning a typed [`FetchError`]
//!
//! # Example
//!
//! ```ignore
//! use cloudpile::api::ResourceClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let endpoint = url::Url::parse("http://127.0.0.1:3000")?;
//!     let client = ResourceClient::new(&endpoint)?;
//!     let resources = client.fetch_resources().await?;
//!     Ok(())
//! }
//! ```

pub mod client;

pub use client::{FetchError, FetchEvent, ResourceClient};
