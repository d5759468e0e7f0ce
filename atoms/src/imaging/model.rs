use image::ImageOutputFormat;
use serde::{Deserialize, Serialize};

/// Exact output dimensions; aspect ratio of the source is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl Default for TargetSize {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputFormat {
    #[serde(rename = "jpeg")]
    Jpeg { quality: u8 },
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg { quality: 75 }
    }
}

impl OutputFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "image/jpeg",
        }
    }

    pub(crate) fn encoder_format(&self) -> ImageOutputFormat {
        match self {
            OutputFormat::Jpeg { quality } => ImageOutputFormat::Jpeg(*quality),
        }
    }
}
