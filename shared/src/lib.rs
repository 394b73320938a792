pub mod types;
pub mod config;
pub mod error;
pub mod key;
pub mod storage;
pub mod image_processing;
pub mod handler;

pub use config::ProcessConfig;
pub use error::ProcessingError;
pub use handler::ThumbnailHandler;
pub use image_processing::{ImageCodec, LanczosJpegCodec};
pub use storage::{ObjectStore, S3ObjectStore, StoreError};
pub use types::{ThumbnailRequest, ThumbnailResponse, ThumbnailResult};
