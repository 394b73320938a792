use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object s3://{bucket}/{key} not found")]
    NotFound { bucket: String, key: String },
    #[error(transparent)]
    Service(BoxError),
}

/// Bucket/key addressed blob storage
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the whole object into memory
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;
}

/// `ObjectStore` backed by Amazon S3
#[derive(Clone)]
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let result = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    StoreError::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    StoreError::Service(e.into())
                }
            })?;

        // Collecting consumes the body; an error drops it, which closes the connection
        let body_bytes = result
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Service(e.into()))?
            .into_bytes();

        tracing::debug!("Read {} bytes from s3://{}/{}", body_bytes.len(), bucket, key);

        Ok(body_bytes.into())
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StoreError::Service(e.into()))?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_sdk_s3::types::error::{InvalidObjectState, NoSuchKey};
    use aws_sdk_s3::Client;
    use aws_smithy_mocks::{mock, mock_client};

    #[tokio::test]
    async fn test_s3_get_reads_body() {
        let rule = mock!(Client::get_object)
            .match_requests(|req| req.bucket() == Some("src") && req.key() == Some("cat.png"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"png bytes"))
                    .build()
            });
        let store = S3ObjectStore::new(mock_client!(aws_sdk_s3, [&rule]));

        assert_eq!(store.get("src", "cat.png").await.unwrap(), b"png bytes".to_vec());
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_s3_no_such_key_is_not_found() {
        let rule = mock!(Client::get_object)
            .then_error(|| GetObjectError::NoSuchKey(NoSuchKey::builder().build()));
        let store = S3ObjectStore::new(mock_client!(aws_sdk_s3, [&rule]));

        match store.get("src", "missing.png").await {
            Err(StoreError::NotFound { bucket, key }) => {
                assert_eq!(bucket, "src");
                assert_eq!(key, "missing.png");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_s3_other_errors_are_service_errors() {
        let rule = mock!(Client::get_object).then_error(|| {
            GetObjectError::InvalidObjectState(InvalidObjectState::builder().build())
        });
        let store = S3ObjectStore::new(mock_client!(aws_sdk_s3, [&rule]));

        assert!(matches!(
            store.get("src", "archived.png").await,
            Err(StoreError::Service(_))
        ));
    }

    #[tokio::test]
    async fn test_s3_put_sends_content_type() {
        let rule = mock!(Client::put_object)
            .match_requests(|req| {
                req.bucket() == Some("thumbs")
                    && req.key() == Some("resized-cat.png")
                    && req.content_type() == Some("image/jpeg")
            })
            .then_output(|| PutObjectOutput::builder().build());
        let store = S3ObjectStore::new(mock_client!(aws_sdk_s3, [&rule]));

        store
            .put("thumbs", "resized-cat.png", vec![0xFF, 0xD8], "image/jpeg")
            .await
            .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound {
            bucket: "src".to_string(),
            key: "missing.png".to_string(),
        };
        assert_eq!(err.to_string(), "object s3://src/missing.png not found");
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        store
            .put("thumbs", "resized-a.png", vec![1, 2, 3], "image/jpeg")
            .await
            .unwrap();

        assert_eq!(store.get("thumbs", "resized-a.png").await.unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            store.get("thumbs", "other.png").await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
