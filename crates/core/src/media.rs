//! Client-side image normalization for uploads.
//!
//! Selected files are validated, decoded, resampled to fit the display
//! slot, and re-encoded before any byte travels to the upload endpoint,
//! bounding transfer size and normalizing dimensions. Each call owns its
//! decode/encode buffers; nothing is shared or cached across invocations.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::slug::slugify;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Ceiling on the size of a selected file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Content types accepted for upload.
pub const ACCEPTED_CONTENT_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Default bounds for general image uploads.
pub const UPLOAD_MAX_SIDE: u32 = 1920;

/// Side of the square avatar slot.
pub const AVATAR_SIDE: u32 = 200;

/// Outputs at most this wide and tall get the higher default quality.
const SMALL_OUTPUT_BOUND: u32 = 500;

const QUALITY_SMALL: f32 = 0.90;
const QUALITY_LARGE: f32 = 0.85;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raster format the pipeline can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// MIME type of the emitted bytes.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }
}

/// A user-selected file: raw bytes plus the declared content type.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl ImageSource {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Target constraints for a normalization run.
#[derive(Debug, Clone)]
pub struct ImageConstraints {
    pub max_width: u32,
    pub max_height: u32,
    /// Encoder quality in `0.0..=1.0`; `None` picks a default by output
    /// size tier (see [`ImageConstraints::effective_quality`]).
    pub quality: Option<f32>,
    pub output: OutputFormat,
    /// Clamp both output dimensions to the smaller scaled side.
    pub force_square: bool,
}

impl ImageConstraints {
    /// Bound within `max_width` × `max_height`, JPEG output, tiered
    /// default quality.
    pub fn bounded(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
            quality: None,
            output: OutputFormat::Jpeg,
            force_square: false,
        }
    }

    /// Defaults for general gallery/cover uploads (1920 px bound).
    pub fn upload() -> Self {
        Self::bounded(UPLOAD_MAX_SIDE, UPLOAD_MAX_SIDE)
    }

    /// Defaults for the 200×200 square avatar slot.
    pub fn avatar() -> Self {
        Self {
            max_width: AVATAR_SIDE,
            max_height: AVATAR_SIDE,
            quality: Some(QUALITY_SMALL),
            output: OutputFormat::Jpeg,
            force_square: true,
        }
    }

    /// The quality actually used: the explicit override, or 0.90 for
    /// small outputs (both bounds ≤ 500 px) and 0.85 otherwise.
    pub fn effective_quality(&self) -> f32 {
        self.quality.unwrap_or(
            if self.max_width <= SMALL_OUTPUT_BOUND && self.max_height <= SMALL_OUTPUT_BOUND {
                QUALITY_SMALL
            } else {
                QUALITY_LARGE
            },
        )
    }
}

/// Result of a normalization run, ready for multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub width: u32,
    pub height: u32,
    /// Assigned by [`prepare_avatar`]; `None` when the caller names the
    /// file itself.
    pub filename: Option<String>,
}

/// Errors from the normalization pipeline.
///
/// The first two are user-correctable input problems; the last two are
/// environment failures (corrupt file, encoder malfunction). None are
/// retried automatically: the user reselects a file.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("unsupported image type '{0}' (accepted: jpeg, png, gif, webp)")]
    UnsupportedFormat(String),

    #[error("file is too large ({size} bytes, limit {limit})")]
    FileTooLarge { size: usize, limit: usize },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Normalize a selected file: validate, decode, resample within the
/// constraints, re-encode.
pub fn prepare_image(
    source: &ImageSource,
    constraints: &ImageConstraints,
) -> Result<PreparedImage, MediaError> {
    let format = validate_source(source)?;

    let decoded =
        image::load_from_memory_with_format(&source.bytes, format).map_err(MediaError::Decode)?;

    let (target_width, target_height) =
        plan_dimensions(decoded.width(), decoded.height(), constraints);
    let resampled = resample(decoded, target_width, target_height);
    let bytes = encode(&resampled, constraints)?;

    Ok(PreparedImage {
        bytes,
        content_type: constraints.output.content_type().to_string(),
        width: target_width,
        height: target_height,
        filename: None,
    })
}

/// Normalize a profile photo for the square avatar slot and name the
/// output after the member.
///
/// The filename is `<slug>.jpg`; when `display_name` slugs to nothing the
/// filename is left unset and the caller supplies one.
pub fn prepare_avatar(
    source: &ImageSource,
    display_name: &str,
) -> Result<PreparedImage, MediaError> {
    let mut prepared = prepare_image(source, &ImageConstraints::avatar())?;

    let slug = slugify(display_name);
    if !slug.is_empty() {
        prepared.filename = Some(format!("{slug}.jpg"));
    }

    Ok(prepared)
}

/// Size and content-type checks. Both run before any decode work.
fn validate_source(source: &ImageSource) -> Result<ImageFormat, MediaError> {
    if source.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(MediaError::FileTooLarge {
            size: source.bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    match source.content_type.as_str() {
        "image/jpeg" => Ok(ImageFormat::Jpeg),
        "image/png" => Ok(ImageFormat::Png),
        "image/gif" => Ok(ImageFormat::Gif),
        "image/webp" => Ok(ImageFormat::WebP),
        other => Err(MediaError::UnsupportedFormat(other.to_string())),
    }
}

/// Compute the output dimensions for a source of `width` × `height`.
///
/// Pure geometry: scale uniformly to fit the bounds (never upscale), then,
/// for square outputs, clamp both dimensions to the smaller scaled side.
/// A wide source therefore keeps its scaled height and has its width
/// reduced to match — a squash, not a crop; the avatar display compensates
/// with `object-fit`.
pub fn plan_dimensions(width: u32, height: u32, constraints: &ImageConstraints) -> (u32, u32) {
    let mut target_width = width;
    let mut target_height = height;

    if width > constraints.max_width || height > constraints.max_height {
        let ratio = f64::min(
            constraints.max_width as f64 / width as f64,
            constraints.max_height as f64 / height as f64,
        );
        target_width = (width as f64 * ratio).floor() as u32;
        target_height = (height as f64 * ratio).floor() as u32;
    }

    if constraints.force_square {
        let side = target_width
            .min(target_height)
            .min(constraints.max_width)
            .min(constraints.max_height);
        (side, side)
    } else {
        (target_width, target_height)
    }
}

/// Resample to exactly the planned dimensions. Exact (non-aspect-preserving)
/// scaling is required for the square path.
fn resample(decoded: DynamicImage, width: u32, height: u32) -> DynamicImage {
    if decoded.width() == width && decoded.height() == height {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    }
}

/// Re-encode to the requested output format.
fn encode(img: &DynamicImage, constraints: &ImageConstraints) -> Result<Vec<u8>, MediaError> {
    let mut buf = Vec::new();
    match constraints.output {
        OutputFormat::Jpeg => {
            let quality = quality_percent(constraints.effective_quality());
            // JPEG has no alpha channel; flatten before encoding.
            img.to_rgb8()
                .write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))
                .map_err(MediaError::Encode)?;
        }
        OutputFormat::Png => {
            img.write_with_encoder(PngEncoder::new(&mut buf))
                .map_err(MediaError::Encode)?;
        }
        OutputFormat::WebP => {
            // The bundled WebP encoder is lossless; quality does not apply.
            img.to_rgba8()
                .write_with_encoder(WebPEncoder::new_lossless(&mut buf))
                .map_err(MediaError::Encode)?;
        }
    }
    Ok(buf)
}

/// Map a `0.0..=1.0` quality to the encoder's percent scale.
fn quality_percent(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn png_source(width: u32, height: u32) -> ImageSource {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 80, 40]),
        ));
        let mut bytes = Vec::new();
        img.write_with_encoder(PngEncoder::new(&mut bytes)).unwrap();
        ImageSource::new(bytes, "image/png")
    }

    // -- geometry --

    #[test]
    fn landscape_scales_uniformly_within_bounds() {
        let constraints = ImageConstraints::bounded(1920, 1920);
        assert_eq!(plan_dimensions(4000, 3000, &constraints), (1920, 1440));
    }

    #[test]
    fn square_output_clamps_to_smaller_scaled_side() {
        let constraints = ImageConstraints::avatar();
        // 4000×3000 scales to 200×150, then squares down to 150×150.
        assert_eq!(plan_dimensions(4000, 3000, &constraints), (150, 150));
    }

    #[test]
    fn small_sources_are_never_upscaled() {
        let constraints = ImageConstraints::bounded(200, 200);
        assert_eq!(plan_dimensions(100, 80, &constraints), (100, 80));

        let square = ImageConstraints {
            force_square: true,
            ..ImageConstraints::bounded(200, 200)
        };
        assert_eq!(plan_dimensions(100, 80, &square), (80, 80));
    }

    #[test]
    fn exact_fit_is_left_alone() {
        let constraints = ImageConstraints::bounded(1920, 1920);
        assert_eq!(plan_dimensions(1920, 1080, &constraints), (1920, 1080));
    }

    // -- quality defaults --

    #[test]
    fn quality_defaults_follow_the_size_tier() {
        assert_eq!(ImageConstraints::bounded(1920, 1920).effective_quality(), 0.85);
        assert_eq!(ImageConstraints::bounded(400, 400).effective_quality(), 0.90);
        let overridden = ImageConstraints {
            quality: Some(0.5),
            ..ImageConstraints::bounded(1920, 1920)
        };
        assert_eq!(overridden.effective_quality(), 0.5);
    }

    #[test]
    fn quality_percent_is_clamped() {
        assert_eq!(quality_percent(0.85), 85);
        assert_eq!(quality_percent(0.0), 1);
        assert_eq!(quality_percent(1.0), 100);
    }

    // -- validation --

    #[test]
    fn unsupported_content_type_is_rejected_before_decode() {
        let source = ImageSource::new(vec![0u8; 16], "image/tiff");
        assert_matches!(
            prepare_image(&source, &ImageConstraints::upload()),
            Err(MediaError::UnsupportedFormat(t)) if t == "image/tiff"
        );
    }

    #[test]
    fn oversized_file_is_rejected_before_decode() {
        // Garbage bytes: the size check must fire before any decode attempt.
        let source = ImageSource::new(vec![0u8; MAX_UPLOAD_BYTES + 1], "image/png");
        assert_matches!(
            prepare_image(&source, &ImageConstraints::upload()),
            Err(MediaError::FileTooLarge { limit, .. }) if limit == MAX_UPLOAD_BYTES
        );
    }

    #[test]
    fn corrupt_bytes_fail_at_decode() {
        let source = ImageSource::new(b"definitely not a png".to_vec(), "image/png");
        assert_matches!(
            prepare_image(&source, &ImageConstraints::upload()),
            Err(MediaError::Decode(_))
        );
    }

    // -- end to end --

    #[test]
    fn downscales_and_reencodes_to_jpeg() {
        let source = png_source(64, 32);
        let prepared = prepare_image(&source, &ImageConstraints::bounded(16, 16)).unwrap();
        assert_eq!((prepared.width, prepared.height), (16, 8));
        assert_eq!(prepared.content_type, "image/jpeg");
        assert_eq!(prepared.filename, None);

        let round_trip = image::load_from_memory(&prepared.bytes).unwrap();
        assert_eq!((round_trip.width(), round_trip.height()), (16, 8));
    }

    #[test]
    fn png_output_stays_png() {
        let source = png_source(10, 10);
        let constraints = ImageConstraints {
            output: OutputFormat::Png,
            ..ImageConstraints::bounded(8, 8)
        };
        let prepared = prepare_image(&source, &constraints).unwrap();
        assert_eq!(prepared.content_type, "image/png");
        assert_eq!(
            image::guess_format(&prepared.bytes).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn avatar_is_squared_named_and_jpeg() {
        let source = png_source(64, 48);
        let prepared = prepare_avatar(&source, "Jean-Pierre Martin").unwrap();
        // 64×48 fits the 200 px bound, so no scaling; square clamps to 48.
        assert_eq!((prepared.width, prepared.height), (48, 48));
        assert_eq!(prepared.content_type, "image/jpeg");
        assert_eq!(prepared.filename.as_deref(), Some("jean-pierre-martin.jpg"));
    }

    #[test]
    fn avatar_with_unusable_name_leaves_filename_unset() {
        let source = png_source(20, 20);
        let prepared = prepare_avatar(&source, "").unwrap();
        assert_eq!(prepared.filename, None);
    }
}
