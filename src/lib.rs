//! Client-side data layer for a portfolio site backed by a headless CMS:
//! cached reads with background revalidation, fallback-first home sections,
//! list filtering, form submission, SEO head tags and section navigation.

pub mod client;
pub mod config;
pub mod modules;
pub mod shared;
pub mod telemetry;

pub use client::PortfolioClient;
pub use config::{ClientConfig, ConfigError};

#[cfg(test)]
mod tests;
