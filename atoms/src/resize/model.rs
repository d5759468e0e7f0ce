use crate::imaging::{OutputFormat, TargetSize};
use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_SOURCE_BUCKET: &str = "samuelcollegeworkbucket";
pub const DEFAULT_DESTINATION_BUCKET: &str = "samuelcollegeworkbucketdestination";
pub const DEFAULT_DESTINATION_PREFIX: &str = "resized-";

/// Status reported for every invocation, however many records failed.
pub const STATUS_FINISHED: &str = "finalizado";

/// Where images come from, where they go, and what they become.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    pub source_bucket: String,
    pub destination_bucket: String,
    pub target_width: u32,
    pub target_height: u32,
    pub destination_prefix: String,
    pub output_format: OutputFormat,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        let target = TargetSize::default();
        Self {
            source_bucket: DEFAULT_SOURCE_BUCKET.to_string(),
            destination_bucket: DEFAULT_DESTINATION_BUCKET.to_string(),
            target_width: target.width,
            target_height: target.height,
            destination_prefix: DEFAULT_DESTINATION_PREFIX.to_string(),
            output_format: OutputFormat::default(),
        }
    }
}

impl ResizeConfig {
    pub fn target_size(&self) -> TargetSize {
        TargetSize {
            width: self.target_width,
            height: self.target_height,
        }
    }

    pub fn destination_key(&self, source_key: &str) -> String {
        format!("{}{}", self.destination_prefix, source_key)
    }
}

/// Every way a single record can fail. All of them end up in the result log.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("{0}")]
    MalformedRecord(String),
    #[error("{0}")]
    Fetch(StorageError),
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Encode(String),
    #[error("{0}")]
    Upload(StorageError),
}

/// Tagged result of one record's trip through the pipeline.
#[derive(Debug)]
pub enum RecordOutcome {
    Resized {
        source_key: String,
        destination_key: String,
    },
    Failed {
        /// `None` when the record carried no usable key.
        source_key: Option<String>,
        position: usize,
        error: ResizeError,
    },
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecordOutcome::Resized { .. })
    }
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordOutcome::Resized {
                source_key,
                destination_key,
            } => write!(
                f,
                "Imagem {} redimensionada e salva como {}",
                source_key, destination_key
            ),
            RecordOutcome::Failed {
                source_key: Some(key),
                error,
                ..
            } => write!(f, "Erro ao processar {}: {}", key, error),
            RecordOutcome::Failed {
                source_key: None,
                position,
                error,
            } => write!(f, "Erro ao processar registro #{}: {}", position, error),
        }
    }
}

/// Value returned to the invoking runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSummary {
    pub status: String,
    #[serde(rename = "detalhes")]
    pub details: Vec<String>,
}

impl ResizeSummary {
    pub fn from_outcomes(outcomes: &[RecordOutcome]) -> Self {
        Self {
            status: STATUS_FINISHED.to_string(),
            details: outcomes.iter().map(|o| o.to_string()).collect(),
        }
    }
}
