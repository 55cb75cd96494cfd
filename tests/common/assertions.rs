//! Assertion helpers for tests.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use inkpress::rendering::SIGNATURE;

/// An indexed PNG decoded without palette expansion.
#[derive(Debug)]
pub struct DecodedIndexed {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub palette: Vec<u8>,
    /// One index per pixel, row-major
    pub indices: Vec<u8>,
}

/// Decode `bytes` with the `png` crate, keeping raw palette indices
pub fn decode_indexed(bytes: &[u8]) -> DecodedIndexed {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("valid PNG header");

    let palette = reader
        .info()
        .palette
        .as_ref()
        .map(|p| p.to_vec())
        .expect("PLTE chunk present");

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).expect("valid image data");
    assert_eq!(frame.color_type, png::ColorType::Indexed);

    let bit_depth = frame.bit_depth as u8;
    let per_byte = (8 / bit_depth) as usize;
    let mask = (1u8 << bit_depth) - 1;
    let mut indices = Vec::with_capacity((frame.width * frame.height) as usize);
    for row in buf[..frame.buffer_size()].chunks(frame.line_size) {
        for x in 0..frame.width as usize {
            let byte = row[x / per_byte];
            let shift = 8 - bit_depth as usize * (x % per_byte + 1);
            indices.push((byte >> shift) & mask);
        }
    }

    DecodedIndexed {
        width: frame.width,
        height: frame.height,
        bit_depth,
        palette,
        indices,
    }
}

/// Assert `bytes` starts with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&SIGNATURE),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every sample is one of `levels`
pub fn assert_levels(samples: &[u8], levels: &[u8]) {
    let stray: Vec<u8> = samples
        .iter()
        .copied()
        .filter(|v| !levels.contains(v))
        .collect();
    assert!(
        stray.is_empty(),
        "Samples outside {levels:?}: {:?}",
        &stray[..stray.len().min(16)]
    );
}

/// Assert a grey palette with evenly spaced entries
pub fn assert_grey_palette(palette: &[u8], levels: &[u8]) {
    let expected: Vec<u8> = levels.iter().flat_map(|&v| [v, v, v]).collect();
    assert_eq!(palette, expected.as_slice());
}
