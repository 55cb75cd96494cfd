//! PNG I/O through the `png` crate: preview output and source decoding.

use std::io::Cursor;

use eink_tone::SampleBuffer;

use crate::error::EncodeError;
use crate::models::RgbaImage;

/// Encode a grey buffer as an 8-bit grayscale PNG.
///
/// Used for the undithered preview next to the indexed container.
pub fn encode_preview(buffer: &SampleBuffer) -> Result<Vec<u8>, EncodeError> {
    if buffer.is_empty() {
        return Err(EncodeError::EmptyImage);
    }
    let (width, height) = (buffer.width(), buffer.height());
    let overflow = || EncodeError::DimensionOverflow { width, height };
    let width_u32 = u32::try_from(width).map_err(|_| overflow())?;
    let height_u32 = u32::try_from(height).map_err(|_| overflow())?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width_u32, height_u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::Png(e.to_string()))?;
        writer
            .write_image_data(buffer.samples())
            .map_err(|e| EncodeError::Png(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Decode any PNG into straight 8-bit RGBA.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, EncodeError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| EncodeError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| EncodeError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let pixels: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(EncodeError::Decode(
                "indexed output after palette expansion".to_string(),
            ))
        }
    };

    RgbaImage::new(info.width, info.height, pixels)
        .map_err(|e| EncodeError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_round_trip() {
        let samples: Vec<u8> = (0..12).map(|i| i * 20).collect();
        let buffer = SampleBuffer::new(4, 3, samples.clone()).unwrap();
        let bytes = encode_preview(&buffer).unwrap();

        let image = decode_rgba(&bytes).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        let reds: Vec<u8> = image.pixels().chunks_exact(4).map(|px| px[0]).collect();
        assert_eq!(reds, samples);
        assert!(image.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_preview_rejects_empty() {
        let buffer = SampleBuffer::new(0, 3, vec![]).unwrap();
        assert!(matches!(
            encode_preview(&buffer),
            Err(EncodeError::EmptyImage)
        ));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_rgba(b"not a png"),
            Err(EncodeError::Decode(_))
        ));
    }
}
