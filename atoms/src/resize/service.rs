use super::model::{RecordOutcome, ResizeConfig, ResizeError, ResizeSummary};
use crate::events::{NotificationEvent, NotificationRecord};
use crate::imaging;
use crate::storage::ObjectStore;
use serde_json::Value;

/// Run every record of `event` through the pipeline, strictly in order, and
/// collect one status line per record. Never fails.
pub async fn handle_event(
    store: &dyn ObjectStore,
    config: &ResizeConfig,
    event: &NotificationEvent,
) -> ResizeSummary {
    let mut outcomes = Vec::with_capacity(event.records.len());

    if let Some(reason) = &event.rejected {
        let outcome = RecordOutcome::Failed {
            source_key: None,
            position: 0,
            error: ResizeError::MalformedRecord(reason.clone()),
        };
        tracing::error!("❌ {}", outcome);
        outcomes.push(outcome);
    }

    for (position, raw) in event.records.iter().enumerate() {
        let outcome = process_record(store, config, position, raw).await;
        if outcome.is_success() {
            tracing::info!("✅ {}", outcome);
        } else {
            tracing::error!("❌ {}", outcome);
        }
        outcomes.push(outcome);
    }

    ResizeSummary::from_outcomes(&outcomes)
}

/// Error boundary around one record: any failure becomes `RecordOutcome::Failed`.
pub async fn process_record(
    store: &dyn ObjectStore,
    config: &ResizeConfig,
    position: usize,
    raw: &Value,
) -> RecordOutcome {
    let source_key = match NotificationRecord::key_from_value(raw) {
        Ok(key) => key,
        Err(e) => {
            return RecordOutcome::Failed {
                source_key: None,
                position,
                error: ResizeError::MalformedRecord(e),
            }
        }
    };

    match resize_object(store, config, &source_key).await {
        Ok(destination_key) => RecordOutcome::Resized {
            source_key,
            destination_key,
        },
        Err(error) => RecordOutcome::Failed {
            source_key: Some(source_key),
            position,
            error,
        },
    }
}

/// Fetch, decode, resize, encode and upload one object. Returns the
/// destination key.
pub async fn resize_object(
    store: &dyn ObjectStore,
    config: &ResizeConfig,
    source_key: &str,
) -> Result<String, ResizeError> {
    tracing::info!(
        "📥 Downloading {} from bucket {}",
        source_key,
        config.source_bucket
    );
    let original = store
        .get(&config.source_bucket, source_key)
        .await
        .map_err(ResizeError::Fetch)?;

    let image = imaging::decode_image(&original).map_err(ResizeError::Decode)?;
    drop(original);

    let resized = imaging::resize_exact(&image, config.target_size());
    let encoded =
        imaging::encode_image(&resized, config.output_format).map_err(ResizeError::Encode)?;

    let destination_key = config.destination_key(source_key);
    tracing::info!(
        "📤 Uploading {} ({} bytes) to bucket {}",
        destination_key,
        encoded.len(),
        config.destination_bucket
    );
    store
        .put(
            &config.destination_bucket,
            &destination_key,
            encoded,
            config.output_format.content_type(),
        )
        .await
        .map_err(ResizeError::Upload)?;

    Ok(destination_key)
}
