use crate::error::InferenceError;
use crate::model_host::model_config::{ModelConfig, TensorLayout};
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, InferenceError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Stretches to the model resolution (no letterboxing) and adds the batch
/// dimension.
pub fn image_to_tensor(image: &DynamicImage, config: &ModelConfig) -> Tensor {
    let (height, width) = config.input_shape;
    let rgb = image
        .resize_exact(width, height, imageops::FilterType::Triangle)
        .to_rgb8();
    let (height, width) = (height as usize, width as usize);
    let scale = config.pixel_scale;

    match config.layout {
        TensorLayout::Nhwc => {
            tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
                scale.apply(rgb.get_pixel(x as u32, y as u32)[c])
            })
            .into_tensor()
        }
        TensorLayout::Nchw => {
            tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
                scale.apply(rgb.get_pixel(x as u32, y as u32)[c])
            })
            .into_tensor()
        }
    }
}

pub fn preprocess(bytes: &[u8], config: &ModelConfig) -> Result<Tensor, InferenceError> {
    let image = decode_image(bytes)?;
    Ok(image_to_tensor(&image, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_host::model_config::PixelScale;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_nhwc_shape_and_raw_values() {
        let config = ModelConfig::default();

        let tensor = preprocess(&png_bytes(&solid(300, 200, [255, 0, 0])), &config).unwrap();

        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        let slice = tensor.as_slice::<f32>().unwrap();
        // Channels are innermost.
        assert_eq!(&slice[0..3], &[255.0, 0.0, 0.0]);
        assert_eq!(&slice[slice.len() - 3..], &[255.0, 0.0, 0.0]);
    }

    #[test]
    fn test_nchw_with_unit_scale() {
        let config = ModelConfig {
            input_shape: (64, 32),
            layout: TensorLayout::Nchw,
            pixel_scale: PixelScale::Unit,
            ..ModelConfig::default()
        };

        let tensor = image_to_tensor(&solid(100, 100, [255, 0, 0]), &config);

        assert_eq!(tensor.shape(), &[1, 3, 64, 32]);
        let slice = tensor.as_slice::<f32>().unwrap();
        assert_eq!(slice[0], 1.0);
        assert_eq!(slice[64 * 32], 0.0);
        assert_eq!(slice[2 * 64 * 32], 0.0);
    }

    #[test]
    fn test_gray_is_preserved_through_resize() {
        let config = ModelConfig {
            pixel_scale: PixelScale::Unit,
            ..ModelConfig::default()
        };

        let tensor = image_to_tensor(&solid(50, 80, [128, 128, 128]), &config);

        let expected = 128.0 / 255.0;
        for value in tensor.as_slice::<f32>().unwrap().iter().take(30) {
            assert!((value - expected).abs() < 0.0001);
        }
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        let result = preprocess(b"definitely not a picture", &ModelConfig::default());

        assert!(matches!(result, Err(InferenceError::Decode(_))));
    }
}
