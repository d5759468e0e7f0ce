pub mod config;
pub mod logging;

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use resizer_atoms::resize::ResizeConfig;

/// Process-wide state built once at cold start and reused by every invocation.
pub struct AppState {
    pub s3_client: S3Client,
    pub config: ResizeConfig,
}

impl AppState {
    /// Load AWS credentials/region from the default chain and the resize
    /// configuration from the environment.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let config = config::resize_config_from_env();

        tracing::info!(
            "🔧 Resizer configured: source={}, destination={}, target={}x{}",
            config.source_bucket,
            config.destination_bucket,
            config.target_width,
            config.target_height,
        );

        Self {
            s3_client: S3Client::new(&sdk_config),
            config,
        }
    }
}
