use base64::{engine::general_purpose::STANDARD, Engine};
use image::DynamicImage;

use crate::error::AppError;

/// Base64 image payload as received from a client, optionally data-URI prefixed.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    encoded: String,
}

impl ImagePayload {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Payload text with any `data:...;base64,` prefix removed.
    pub fn base64_body(&self) -> &str {
        match self.encoded.split_once(',') {
            Some((_, body)) => body,
            None => &self.encoded,
        }
        .trim()
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>, AppError> {
        let body = self.base64_body();
        if body.is_empty() {
            return Err(AppError::MissingImage);
        }
        Ok(STANDARD.decode(body)?)
    }

    /// Base64 and image decoding. CPU-bound, so async callers should run it
    /// on the blocking pool.
    pub fn decode(&self) -> Result<DynamicImage, AppError> {
        let bytes = self.decode_bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn png_base64() -> String {
        let img: DynamicImage = DynamicImage::ImageRgb8(
            ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(4, 3, Rgb([10, 20, 30])),
        );
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        STANDARD.encode(bytes)
    }

    #[test]
    fn strips_data_uri_prefix() {
        let payload = ImagePayload::new("data:image/png;base64,aGVsbG8=");
        assert_eq!(payload.base64_body(), "aGVsbG8=");
        assert_eq!(payload.decode_bytes().unwrap(), b"hello");
    }

    #[test]
    fn decodes_png_payload() {
        let payload = ImagePayload::new(format!("data:image/png;base64,{}", png_base64()));
        let image = payload.decode().unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
    }

    #[test]
    fn malformed_base64_is_rejected() {
        let payload = ImagePayload::new("not base64 at all!");
        assert!(matches!(
            payload.decode_bytes(),
            Err(AppError::InvalidBase64(_))
        ));
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let payload = ImagePayload::new(STANDARD.encode(b"definitely not an image"));
        assert!(matches!(
            payload.decode(),
            Err(AppError::InvalidImage { .. })
        ));
    }

    #[test]
    fn empty_body_is_missing_image() {
        let payload = ImagePayload::new("data:image/png;base64,");
        assert!(matches!(payload.decode_bytes(), Err(AppError::MissingImage)));
    }
}
