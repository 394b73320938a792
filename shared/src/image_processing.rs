use image::codecs::jpeg::JpegEncoder;
use image::{imageops::FilterType, DynamicImage, ImageResult};

/// JPEG quality used for thumbnails
pub const JPEG_QUALITY: u8 = 95;

/// Decode, resize and encode operations the thumbnail pipeline needs
pub trait ImageCodec: Send + Sync {
    /// Decode bytes of any supported format
    fn decode(&self, bytes: &[u8]) -> ImageResult<DynamicImage>;

    /// Scale to fit inside `max_width` x `max_height`, keeping aspect ratio.
    /// A zero bound leaves that dimension unconstrained.
    fn resize(&self, image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage;

    fn encode_jpeg(&self, image: &DynamicImage) -> ImageResult<Vec<u8>>;
}

/// `image` crate codec with a Lanczos3 resampling filter
#[derive(Debug, Clone, Copy, Default)]
pub struct LanczosJpegCodec;

impl ImageCodec for LanczosJpegCodec {
    fn decode(&self, bytes: &[u8]) -> ImageResult<DynamicImage> {
        image::load_from_memory(bytes)
    }

    fn resize(&self, image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
        let (width, height) = fit_dimensions(image.width(), image.height(), max_width, max_height);
        if (width, height) == (image.width(), image.height()) {
            return image.clone();
        }
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode_jpeg(&self, image: &DynamicImage) -> ImageResult<Vec<u8>> {
        // JPEG has no alpha channel
        let rgb = image.to_rgb8();

        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).encode_image(&rgb)?;

        Ok(buf)
    }
}

/// Dimensions an image of `width` x `height` gets when fit inside the bounds.
///
/// A zero bound means "any size" for that side; with both zero the image keeps
/// its size. Otherwise rounds the same way `DynamicImage::resize` does.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let wratio = max_width as f64 / width as f64;
    let hratio = max_height as f64 / height as f64;
    let ratio = match (max_width, max_height) {
        (0, 0) => return (width, height),
        (0, _) => hratio,
        (_, 0) => wratio,
        _ => f64::min(wratio, hratio),
    };

    let new_width = ((width as f64 * ratio).round() as u64).max(1);
    let new_height = ((height as f64 * ratio).round() as u64).max(1);

    (
        new_width.min(u32::MAX as u64) as u32,
        new_height.min(u32::MAX as u64) as u32,
    )
}
