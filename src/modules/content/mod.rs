//! Published portfolio content and the fallback-first sections built on it.

pub mod adapter;
pub mod application;
