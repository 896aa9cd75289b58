//! Stale-while-revalidate data source shared by every component of a page.
//!
//! `ResourceCache::subscribe` is the equivalent of a data hook: it returns
//! whatever is cached for the key (or the fallback) right away, and keeps the
//! key fresh in the background for as long as a subscriber is mounted.

mod cache;
mod options;
mod resource;

pub use cache::{json_fetcher, FetchOutcome, Fetcher, ResourceCache, ResourceSnapshot};
pub use options::ResourceOptions;
pub use resource::Resource;
