use super::{ObjectStore, StorageError};
use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

const ACCESS_DENIED: &str = "AccessDenied";

#[async_trait]
impl ObjectStore for S3Client {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let detail = DisplayErrorContext(&e).to_string();
                if matches!(e.as_service_error(), Some(GetObjectError::NoSuchKey(_))) {
                    StorageError::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else if e.code() == Some(ACCESS_DENIED) {
                    StorageError::AccessDenied {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                        detail,
                    }
                } else {
                    StorageError::Transport(format!("S3 get_object error: {}", detail))
                }
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Transport(format!("Failed to read S3 body: {}", e)))?
            .into_bytes();

        Ok(body.to_vec())
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                if e.code() == Some(ACCESS_DENIED) {
                    StorageError::AccessDenied {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                        detail: DisplayErrorContext(&e).to_string(),
                    }
                } else {
                    StorageError::Transport(format!(
                        "S3 put_object error: {}",
                        DisplayErrorContext(&e)
                    ))
                }
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::retry::RetryConfig;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
    use aws_smithy_types::body::SdkBody;

    const BUCKET: &str = "samuelcollegeworkbucket";

    fn error_body(code: &str, message: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <Error><Code>{}</Code><Message>{}</Message><RequestId>4442587FB7D0A2F9</RequestId></Error>",
            code, message
        )
    }

    /// Client whose only HTTP exchange answers with `status` and `body`.
    fn client_answering(status: u16, body: impl Into<SdkBody>) -> S3Client {
        let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
            http::Request::builder()
                .uri(format!("https://{}.s3.us-east-1.amazonaws.com/imagem.jpg", BUCKET))
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(status)
                .body(body.into())
                .unwrap(),
        )]);

        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("akid", "secret", None, None, "test"))
            .retry_config(RetryConfig::disabled())
            .http_client(http_client)
            .build();

        S3Client::from_conf(config)
    }

    #[tokio::test]
    async fn get_returns_object_body() {
        let client = client_answering(200, SdkBody::from(vec![1u8, 2, 3]));

        assert_eq!(client.get(BUCKET, "imagem.jpg").await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn get_maps_no_such_key_to_not_found() {
        let client = client_answering(
            404,
            error_body("NoSuchKey", "The specified key does not exist."),
        );

        let err = client.get(BUCKET, "imagem.jpg").await.unwrap_err();

        assert!(matches!(err, StorageError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "object imagem.jpg not found in bucket samuelcollegeworkbucket"
        );
    }

    #[tokio::test]
    async fn get_maps_access_denied() {
        let client = client_answering(403, error_body("AccessDenied", "Access Denied"));

        let err = client.get(BUCKET, "imagem.jpg").await.unwrap_err();

        assert!(matches!(err, StorageError::AccessDenied { .. }));
        let message = err.to_string();
        assert!(
            message.starts_with("access denied to imagem.jpg in bucket samuelcollegeworkbucket:")
        );
        assert!(message.contains("AccessDenied"));
    }

    #[tokio::test]
    async fn get_maps_other_failures_to_transport() {
        let client = client_answering(
            500,
            error_body("InternalError", "We encountered an internal error."),
        );

        let err = client.get(BUCKET, "imagem.jpg").await.unwrap_err();

        assert!(matches!(err, StorageError::Transport(_)));
        let message = err.to_string();
        assert!(message.starts_with("storage transport error: S3 get_object error:"));
        assert!(message.contains("InternalError"));
    }

    #[tokio::test]
    async fn put_succeeds_on_ok_response() {
        let client = client_answering(200, SdkBody::empty());

        client
            .put(BUCKET, "resized-imagem.jpg", vec![0xFF, 0xD8], "image/jpeg")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn put_maps_access_denied() {
        let client = client_answering(403, error_body("AccessDenied", "Access Denied"));

        let err = client
            .put(BUCKET, "resized-imagem.jpg", vec![0xFF, 0xD8], "image/jpeg")
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::AccessDenied { .. }));
        let message = err.to_string();
        assert!(message.starts_with("access denied to resized-imagem.jpg in bucket"));
        assert!(message.contains("AccessDenied"));
    }

    #[tokio::test]
    async fn put_maps_other_failures_to_transport() {
        let client = client_answering(
            503,
            error_body("SlowDown", "Please reduce your request rate."),
        );

        let err = client
            .put(BUCKET, "resized-imagem.jpg", vec![0xFF, 0xD8], "image/jpeg")
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Transport(_)));
        let message = err.to_string();
        assert!(message.starts_with("storage transport error: S3 put_object error:"));
        assert!(message.contains("SlowDown"));
    }
}
