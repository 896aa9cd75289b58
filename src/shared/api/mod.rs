mod endpoints;
mod response;

pub use endpoints::ApiEndpoint;
pub use response::{rejection_message, unwrap_envelope};
