//! Decode raw image bytes into the model's input tensor.

use image::imageops::FilterType;

use derma_core::errors::{DermaResult, InferenceError};
use derma_core::models::ImageTensor;

/// Decode, resize, and normalize an uploaded image.
///
/// Output layout is `[1, side, side, 3]` (batch, height, width, channel),
/// bilinear-resized, every channel value divided by 255.0.
pub fn decode_image(bytes: &[u8], side: u32) -> DermaResult<ImageTensor> {
    let decoded = image::load_from_memory(bytes).map_err(|e| InferenceError::DecodeFailed {
        reason: e.to_string(),
    })?;

    let rgb = decoded
        .resize_exact(side, side, FilterType::Triangle)
        .to_rgb8();

    let mut data = Vec::with_capacity((side * side * 3) as usize);
    for pixel in rgb.pixels() {
        for channel in 0..3 {
            data.push(f32::from(pixel[channel]) / 255.0);
        }
    }

    Ok(ImageTensor {
        shape: [1, side as usize, side as usize, 3],
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};
    use std::io::Cursor;

    fn encode_png(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut buffer = ImageBuffer::new(width, height);
        for pixel in buffer.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(buffer)
    }

    #[test]
    fn red_image_decodes_to_expected_shape_and_values() {
        let bytes = encode_png(&solid_image(100, 100, [255, 0, 0]));
        let tensor = decode_image(&bytes, 150).unwrap();

        assert_eq!(tensor.shape, [1, 150, 150, 3]);
        assert_eq!(tensor.data.len(), 150 * 150 * 3);

        // Interleaved channels: first pixel is (R, G, B).
        assert_eq!(tensor.data[0], 1.0);
        assert_eq!(tensor.data[1], 0.0);
        assert_eq!(tensor.data[2], 0.0);
    }

    #[test]
    fn gray_image_is_normalized() {
        let bytes = encode_png(&solid_image(64, 64, [128, 128, 128]));
        let tensor = decode_image(&bytes, 150).unwrap();

        let expected = 128.0 / 255.0;
        assert!((tensor.data[0] - expected).abs() < 0.0001);
        assert!(tensor.data.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn rectangular_input_is_resized_to_square() {
        let bytes = encode_png(&solid_image(300, 120, [0, 255, 0]));
        let tensor = decode_image(&bytes, 150).unwrap();
        assert_eq!(tensor.shape, [1, 150, 150, 3]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_image(b"definitely not an image", 150).unwrap_err();
        assert!(err.to_string().contains("image decode failed"));
    }
}
