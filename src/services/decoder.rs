use std::path::Path;

use crate::error::DecodeError;

/// Container format guessed from the leading bytes of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    WebP,
    Avif,
    /// Anything else; left to the generic decoder
    Other,
}

impl ImageFormat {
    /// Inspect magic bytes: `RIFF....WEBP` for WebP, an ISO-BMFF `ftyp` box
    /// with major brand `avif` for AVIF.
    pub fn detect(header: &[u8]) -> Self {
        if header.len() >= 12 && header.starts_with(b"RIFF") && header[8..12] == *b"WEBP" {
            return ImageFormat::WebP;
        }

        if header.len() >= 12 && header[4..8] == *b"ftyp" && header[8..12] == *b"avif" {
            let box_size = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
            if box_size >= 16 {
                return ImageFormat::Avif;
            }
        }

        ImageFormat::Other
    }

    fn codec_format(self) -> Option<image::ImageFormat> {
        match self {
            ImageFormat::WebP => Some(image::ImageFormat::WebP),
            ImageFormat::Avif => Some(image::ImageFormat::Avif),
            ImageFormat::Other => None,
        }
    }
}

/// Decoder that produced a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    WebP,
    Avif,
    Generic,
}

impl From<ImageFormat> for Codec {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::WebP => Codec::WebP,
            ImageFormat::Avif => Codec::Avif,
            ImageFormat::Other => Codec::Generic,
        }
    }
}

/// Owned, tightly packed RGB8 pixels in row-major order.
///
/// The buffer is an ordinary `Vec`, so it is released when dropped no
/// matter which codec filled it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub codec: Codec,
}

impl PixelBuffer {
    /// Wrap raw RGB8 data, rejecting buffers whose length does not match
    /// `width * height * 3`.
    pub fn new(
        path: &Path,
        width: u32,
        height: u32,
        data: Vec<u8>,
        codec: Codec,
    ) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize * gray_lut::classify::CHANNELS;
        if data.len() != expected {
            return Err(DecodeError::Layout {
                path: path.to_path_buf(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            codec,
        })
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Turns a file into RGB8 pixels.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, DecodeError>;
}

/// Decoder backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDecoder;

impl FileDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode in-memory file contents. `path` is only used for messages.
    pub fn decode_bytes(&self, path: &Path, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        let format = ImageFormat::detect(bytes);

        if let Some(codec_format) = format.codec_format() {
            match image::load_from_memory_with_format(bytes, codec_format) {
                Ok(image) => return Self::to_buffer(path, image, format.into()),
                Err(e) => {
                    tracing::info!(
                        path = %path.display(),
                        format = ?format,
                        error = %e,
                        "Format-specific decode failed, trying generic decoder"
                    );
                }
            }
        }

        let image = image::load_from_memory(bytes).map_err(|e| DecodeError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::to_buffer(path, image, Codec::Generic)
    }

    fn to_buffer(
        path: &Path,
        image: image::DynamicImage,
        codec: Codec,
    ) -> Result<PixelBuffer, DecodeError> {
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        PixelBuffer::new(path, width, height, rgb.into_raw(), codec)
    }
}

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, DecodeError> {
        let bytes = std::fs::read(path).map_err(|source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read image file");
        self.decode_bytes(path, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat as CodecFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(image: &RgbImage, format: CodecFormat) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    fn sample() -> RgbImage {
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(0, 0, Rgb([200, 10, 10]));
        image.put_pixel(2, 1, Rgb([10, 20, 30]));
        image
    }

    #[test]
    fn test_detect_webp() {
        let header = b"RIFF\x24\x00\x00\x00WEBPVP8L";
        assert_eq!(ImageFormat::detect(header), ImageFormat::WebP);
        assert_eq!(ImageFormat::detect(b"RIFF\x24\x00\x00\x00WAVE"), ImageFormat::Other);
    }

    #[test]
    fn test_detect_avif() {
        let header = b"\x00\x00\x00\x1cftypavif\x00\x00\x00\x00";
        assert_eq!(ImageFormat::detect(header), ImageFormat::Avif);

        // An ftyp box too short to hold a brand list
        let short = b"\x00\x00\x00\x08ftypavif";
        assert_eq!(ImageFormat::detect(short), ImageFormat::Other);

        let heic = b"\x00\x00\x00\x1cftypheic\x00\x00\x00\x00";
        assert_eq!(ImageFormat::detect(heic), ImageFormat::Other);
    }

    #[test]
    fn test_detect_short_input() {
        assert_eq!(ImageFormat::detect(b""), ImageFormat::Other);
        assert_eq!(ImageFormat::detect(b"RIFF"), ImageFormat::Other);
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode(&sample(), CodecFormat::Png);
        let buffer = FileDecoder::new()
            .decode_bytes(Path::new("sample.png"), &bytes)
            .unwrap();

        assert_eq!((buffer.width, buffer.height), (3, 2));
        assert_eq!(buffer.codec, Codec::Generic);
        assert_eq!(buffer.pixel_count(), 6);
        assert_eq!(&buffer.data[0..3], &[200, 10, 10]);
        assert_eq!(&buffer.data[15..18], &[10, 20, 30]);
    }

    #[test]
    fn test_decode_webp_uses_format_codec() {
        let bytes = encode(&sample(), CodecFormat::WebP);
        assert_eq!(ImageFormat::detect(&bytes), ImageFormat::WebP);

        let buffer = FileDecoder::new()
            .decode_bytes(Path::new("sample.webp"), &bytes)
            .unwrap();
        assert_eq!(buffer.codec, Codec::WebP);
        // Lossless WebP keeps exact values
        assert_eq!(buffer.data, sample().into_raw());
    }

    #[test]
    fn test_decode_drops_alpha() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, Rgba([1, 2, 3, 0]));
        let mut out = Cursor::new(Vec::new());
        rgba.write_to(&mut out, CodecFormat::Png).unwrap();

        let buffer = FileDecoder::new()
            .decode_bytes(Path::new("alpha.png"), out.get_ref())
            .unwrap();
        assert_eq!(buffer.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupt_webp_falls_back_then_fails() {
        let bytes = b"RIFF\x24\x00\x00\x00WEBPgarbage-garbage".to_vec();
        let err = FileDecoder::new()
            .decode_bytes(Path::new("bad.webp"), &bytes)
            .unwrap_err();
        assert!(matches!(err, DecodeError::Decode { .. }));
        assert_eq!(err.path(), Path::new("bad.webp"));
    }

    #[test]
    fn test_missing_file() {
        let err = FileDecoder::new()
            .decode(Path::new("/nonexistent/image.png"))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Open { .. }));
    }

    #[test]
    fn test_layout_mismatch_rejected() {
        let err = PixelBuffer::new(Path::new("x"), 2, 2, vec![0; 11], Codec::Generic).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Layout {
                expected: 12,
                actual: 11,
                ..
            }
        ));
    }
}
