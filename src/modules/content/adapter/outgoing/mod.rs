pub mod content_query_http;

pub use content_query_http::ContentQueryHttp;
