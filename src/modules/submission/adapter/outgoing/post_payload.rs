// src/modules/submission/adapter/outgoing/post_payload.rs

use serde::Serialize;
use tracing::debug;

use crate::modules::submission::application::ports::outgoing::DeliveryError;
use crate::shared::api::rejection_message;
use crate::shared::fetch::JsonFetcher;

/// POSTs `payload` and treats a `{ "success": false }` reply as a rejection.
pub(super) async fn post_payload<P>(
    fetcher: &dyn JsonFetcher,
    target: &str,
    payload: &P,
) -> Result<(), DeliveryError>
where
    P: Serialize + Sync,
{
    let body = serde_json::to_value(payload)
        .map_err(|e| DeliveryError::Rejected(format!("unserializable payload: {e}")))?;

    let reply = fetcher.post_json(target, &body).await?;
    if let Some(message) = rejection_message(&reply) {
        return Err(DeliveryError::Rejected(message));
    }

    debug!(destination = target, "Payload delivered");
    Ok(())
}
