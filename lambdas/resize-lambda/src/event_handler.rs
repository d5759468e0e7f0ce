use lambda_runtime::{Error, LambdaEvent};
use resizer_atoms::events::NotificationEvent;
use resizer_atoms::resize::{self, ResizeConfig, ResizeSummary};
use resizer_atoms::storage::ObjectStore;
use serde_json::Value;

/// Main Lambda handler - resizes every object named in an S3 notification.
///
/// The payload is taken as raw JSON so that even an unreadable event ends in a
/// `finalizado` summary; this only returns `Ok`, and the `Error` type is what
/// the runtime's service expects.
#[tracing::instrument(skip(event, store, config), fields(req_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    store: &dyn ObjectStore,
    config: &ResizeConfig,
) -> Result<ResizeSummary, Error> {
    let notification = NotificationEvent::from_payload(event.payload);
    tracing::info!(
        "🚀 Resize Lambda invoked with {} record(s)",
        notification.records.len()
    );

    let summary = resize::handle_event(store, config, &notification).await;

    tracing::info!(
        "🏁 Resize Lambda finished: status={}, entries={}",
        summary.status,
        summary.details.len()
    );

    Ok(summary)
}
