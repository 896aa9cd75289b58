//! Per-route head tags: CMS record merged over site defaults, under page
//! overrides.

pub mod head;
pub mod metadata;
pub mod service;

pub use head::HeadTag;
pub use metadata::{
    normalize_route, resolve_seo, Keywords, ResolvedSeo, SeoDefaults, SeoOverrides, SeoRecord,
};
pub use service::{RouteSeo, SeoService};
