use crate::config::ProcessConfig;
use crate::error::ProcessingError;
use crate::image_processing::{fit_dimensions, ImageCodec};
use crate::key::{decode_key, thumbnail_key};
use crate::storage::ObjectStore;
use crate::types::{ThumbnailRequest, ThumbnailResult};

pub const THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";

/// Fetch, shrink and re-upload one image
pub struct ThumbnailHandler<S, C> {
    store: S,
    codec: C,
    config: ProcessConfig,
}

impl<S: ObjectStore, C: ImageCodec> ThumbnailHandler<S, C> {
    pub fn new(store: S, codec: C, config: ProcessConfig) -> Self {
        Self {
            store,
            codec,
            config,
        }
    }

    /// Run the whole pipeline. The first failing step aborts and nothing is uploaded.
    pub async fn process(
        &self,
        request: &ThumbnailRequest,
    ) -> Result<ThumbnailResult, ProcessingError> {
        let source_key =
            decode_key(&request.source_key).map_err(|source| ProcessingError::KeyDecode {
                key: request.source_key.clone(),
                source,
            })?;

        tracing::info!("Fetching s3://{}/{}", request.source_bucket, source_key);
        let bytes = self
            .store
            .get(&request.source_bucket, &source_key)
            .await
            .map_err(ProcessingError::Fetch)?;

        let img = self.codec.decode(&bytes).map_err(ProcessingError::Decode)?;
        drop(bytes);

        let (max_width, max_height) = (self.config.max_width, self.config.max_height);
        let (width, height) = fit_dimensions(img.width(), img.height(), max_width, max_height);
        tracing::info!(
            "Resizing {}x{} to {}x{} (bounds {}x{})",
            img.width(),
            img.height(),
            width,
            height,
            max_width,
            max_height
        );
        let resized = self.codec.resize(&img, max_width, max_height);

        let jpeg = self
            .codec
            .encode_jpeg(&resized)
            .map_err(ProcessingError::Encode)?;

        let destination_key = thumbnail_key(&source_key);
        let destination_bucket = self.config.destination_bucket.clone();
        self.store
            .put(&destination_bucket, &destination_key, jpeg, THUMBNAIL_CONTENT_TYPE)
            .await
            .map_err(ProcessingError::Upload)?;

        tracing::info!(
            "Uploaded thumbnail to s3://{}/{}",
            destination_bucket,
            destination_key
        );

        Ok(ThumbnailResult {
            destination_bucket,
            destination_key,
        })
    }
}
