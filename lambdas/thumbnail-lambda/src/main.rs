use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use thumbnail_shared::{
    LanczosJpegCodec, ProcessConfig, S3ObjectStore, ThumbnailHandler, ThumbnailRequest,
    ThumbnailResponse,
};
use tracing_subscriber::EnvFilter;

type Handler = ThumbnailHandler<S3ObjectStore, LanczosJpegCodec>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();

    // Initialize AWS client and config once at startup
    let config = aws_config::load_from_env().await;
    let process_config = ProcessConfig::from_env();
    tracing::info!(
        "Thumbnail lambda starting - max {}x{}, destination bucket {:?}",
        process_config.max_width,
        process_config.max_height,
        process_config.destination_bucket
    );

    let handler = ThumbnailHandler::new(
        S3ObjectStore::new(S3Client::new(&config)),
        LanczosJpegCodec,
        process_config,
    );
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<ThumbnailRequest>| async move {
        function_handler(event, handler).await
    }))
    .await
}

async fn function_handler(
    event: LambdaEvent<ThumbnailRequest>,
    handler: &Handler,
) -> Result<ThumbnailResponse, Error> {
    let request = event.payload;
    tracing::info!(
        "Thumbnail requested for s3://{}/{} (request {})",
        request.source_bucket,
        request.source_key,
        event.context.request_id
    );

    match handler.process(&request).await {
        Ok(result) => Ok(result.into()),
        Err(e) => {
            tracing::error!("Failed to create thumbnail: {}", e);
            Err(e.into())
        }
    }
}
