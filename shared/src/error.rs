use crate::key::KeyDecodeError;
use crate::storage::StoreError;
use image::ImageError;
use thiserror::Error;

/// Terminal failure of one thumbnail invocation, tagged with the failing step
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to decode S3 key {key:?}: {source}")]
    KeyDecode {
        key: String,
        #[source]
        source: KeyDecodeError,
    },
    #[error("failed to get object from S3: {0}")]
    Fetch(#[source] StoreError),
    #[error("failed to decode image: {0}")]
    Decode(#[source] ImageError),
    #[error("failed to encode resized image: {0}")]
    Encode(#[source] ImageError),
    #[error("failed to upload resized image to S3: {0}")]
    Upload(#[source] StoreError),
}
