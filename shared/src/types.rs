use serde::{Deserialize, Serialize};

// ========== REQUEST ==========
/// Invocation payload. The key arrives percent-encoded, as S3 notifications deliver it.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    #[serde(rename = "s3Bucket", default)]
    pub source_bucket: String,
    #[serde(rename = "s3Key", default)]
    pub source_key: String,
}

impl ThumbnailRequest {
    pub fn new(source_bucket: impl Into<String>, source_key: impl Into<String>) -> Self {
        Self {
            source_bucket: source_bucket.into(),
            source_key: source_key.into(),
        }
    }
}

// ========== RESULT ==========
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ThumbnailResult {
    #[serde(rename = "s3bucket")]
    pub destination_bucket: String,
    #[serde(rename = "s3key")]
    pub destination_key: String,
}

/// Response body returned to the invoker
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ThumbnailResponse {
    pub thumbnail: ThumbnailResult,
}

impl From<ThumbnailResult> for ThumbnailResponse {
    fn from(thumbnail: ThumbnailResult) -> Self {
        Self { thumbnail }
    }
}
